//! Seed content
//!
//! The categories and articles a fresh store starts with. Nothing written at
//! runtime survives a restart; the store always comes back to this set.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Article, Category, DEFAULT_IMAGE};

fn seed_timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn category(id: i64, name: &str, description: &str, day: u32) -> Category {
    let at = seed_timestamp(2025, 1, day);
    Category {
        id,
        name: name.to_string(),
        description: description.to_string(),
        created_at: at,
        updated_at: at,
    }
}

/// Seed categories, ids 1 through 5
pub fn categories() -> Vec<Category> {
    vec![
        category(1, "个人日记", "记录个人生活、思考和感悟的文章", 1),
        category(2, "旅行", "旅行经历、景点推荐和旅游攻略", 2),
        category(3, "技术", "编程、开发和技术学习相关内容", 3),
        category(4, "摄影", "摄影技巧、作品和心得分享", 4),
        category(5, "读书", "读书笔记、书评和阅读心得", 5),
    ]
}

struct SeedArticle {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    content: &'static str,
    day: u32,
    category_id: i64,
    is_featured: bool,
}

const ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        id: "1",
        title: "我的第一篇博客",
        description: "这是我的第一篇博客，欢迎阅读。这里可以放一段较长的介绍，让读者对文章内容有更深入的了解。",
        content: "# Hello World\n\n这是我的第一篇博客的详细内容。这里可以放更多的文字，图片和其他内容。\n\n## Why I Write\n\n作为我的第一篇博客，我想分享一些关于为什么我开始写博客的想法。写博客不仅可以记录自己的思考，还能与他人分享知识和经验。\n\n## What Comes Next\n\n希望我的文章能够对读者有所帮助或启发。",
        day: 20,
        category_id: 1,
        is_featured: true,
    },
    SeedArticle {
        id: "2",
        title: "旅行的意义",
        description: "记录一些旅行中的感悟与美景。",
        content: "旅行对每个人的意义可能都不同。对我来说，旅行是一种探索未知、拓展视野的方式。在旅途中，我们会遇到不同的人、不同的文化，这些经历会丰富我们的人生阅历。同时，旅行也是一种放松身心的方式，让我们暂时脱离日常生活的压力，重新审视自己的生活和目标。",
        day: 18,
        category_id: 2,
        is_featured: false,
    },
    SeedArticle {
        id: "3",
        title: "React学习心得",
        description: "分享最近学习React的一些经验。",
        content: "React是一个用于构建用户界面的JavaScript库，它的核心思想是组件化和单向数据流。\n\n## Core Concepts\n\n在学习React的过程中，我发现理解其核心概念是非常重要的，例如JSX、组件、props、state等。\n\n### State Management\n\n特别是状态管理，是React开发中的关键部分。\n\n## Ecosystem\n\n此外，React生态系统也非常丰富，有很多优秀的库可以配合使用，如Redux、React Router等。",
        day: 15,
        category_id: 3,
        is_featured: true,
    },
    SeedArticle {
        id: "4",
        title: "摄影技巧分享",
        description: "一些实用的摄影技巧和心得体会。",
        content: "摄影是捕捉光与影的艺术。好的摄影作品不仅仅是技术的体现，更是情感和视角的表达。在这篇文章中，我想分享一些基本但实用的摄影技巧，例如构图的原则、光线的运用、快门速度与光圈的关系等。此外，后期处理也是现代摄影不可或缺的一部分，适当的后期调整可以让照片更具表现力。",
        day: 10,
        category_id: 4,
        is_featured: false,
    },
    SeedArticle {
        id: "5",
        title: "读书笔记：《活着》",
        description: "读完余华的《活着》后的一些思考。",
        content: "余华的《活着》是一部展现中国农村生活和人性的作品。通过福贵的一生，余华向我们展示了在时代变迁中个人命运的沉浮。这本书让我思考了很多关于生命意义、苦难与希望的问题。尽管福贵经历了无数的不幸和痛苦，但他仍然选择活着，这种坚韧和生命力是令人敬佩的。",
        day: 5,
        category_id: 5,
        is_featured: false,
    },
];

/// Seed articles, ids "1" through "5", each filed under one seed category
pub fn articles() -> Vec<Article> {
    let categories = categories();

    ARTICLES
        .iter()
        .map(|seed| {
            let at = seed_timestamp(2025, 3, seed.day);
            let filed_under = categories
                .iter()
                .filter(|c| c.id == seed.category_id)
                .cloned()
                .collect();

            let mut article = Article::new(
                seed.title.to_string(),
                seed.description.to_string(),
                seed.content.to_string(),
                at.format("%Y-%m-%d").to_string(),
                DEFAULT_IMAGE.to_string(),
                filed_under,
                seed.is_featured,
            );
            article.id = seed.id.to_string();
            article.created_at = at;
            article.updated_at = at;
            article
        })
        .collect()
}
