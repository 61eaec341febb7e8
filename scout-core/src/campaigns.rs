//! Built-in research campaigns
//!
//! Each campaign is a fixed list of natural-language queries sent one by one
//! to the Perplexity `sonar` model, paired with the system prompt that frames
//! the answers. Queries are kept verbatim, including the Chinese-language
//! ones.

/// A named, fixed sequence of research queries
#[derive(Debug, Clone, Copy)]
pub struct Campaign {
    pub name: &'static str,
    pub description: &'static str,
    pub system_prompt: &'static str,
    pub queries: &'static [&'static str],
}

/// GEO e-commerce automation case studies
pub const GEO: Campaign = Campaign {
    name: "geo",
    description: "GEO and e-commerce automation success cases",
    system_prompt: "You are a research assistant. Provide detailed case studies \
                    with specific numbers and sources.",
    queries: &[
        "GEO Generative Engine Optimization e-commerce automation success case studies 2024",
        "AI shopping assistant intent understanding case studies conversion rates",
        "Schema.org automated structured data e-commerce LLM SEO success examples",
        "对话式电商 AI 助手 案例 成功",
        "跨平台电商聚合 意图识别 成交转化 案例",
    ],
};

/// Intent commerce and psychological counseling case studies
pub const INTENT: Campaign = Campaign {
    name: "intent",
    description: "Intent commerce and user-psychology case studies",
    system_prompt: "You are a research assistant. Provide detailed case studies \
                    with specific examples and implementation details.",
    queries: &[
        "AI 意图理解 心理咨询 用户需求拆解 案例",
        "conversational commerce intent understanding psychological counseling user needs",
        "AI shopping assistant mental model user intent decomposition case studies",
        "意图电商 用户心理分析 结构性需求拆解 成功案例",
        "AI therapist approach to user needs understanding ecommerce implementation",
    ],
};

static CAMPAIGNS: [Campaign; 2] = [GEO, INTENT];

/// All built-in campaigns
pub fn all() -> &'static [Campaign] {
    &CAMPAIGNS
}

/// Find a campaign by name, case-insensitive
pub fn find(name: &str) -> Option<&'static Campaign> {
    CAMPAIGNS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_campaign_has_five_queries() {
        for campaign in all() {
            assert_eq!(campaign.queries.len(), 5, "campaign {}", campaign.name);
            assert!(!campaign.system_prompt.is_empty());
        }
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("geo").unwrap().name, "geo");
        assert_eq!(find("GEO").unwrap().name, "geo");
        assert_eq!(find("Intent").unwrap().name, "intent");
        assert!(find("unknown").is_none());
    }

    #[test]
    fn test_campaign_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }
}
