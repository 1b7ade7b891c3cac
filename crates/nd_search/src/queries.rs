use nd_core::{Category, DateInfo};

/// Queries to run per category, in execution order.
pub type QueryPlan = Vec<(Category, Vec<String>)>;

/// Builds the fixed query list. Most queries pin the current year, some the
/// month too, so the provider favours fresh coverage.
pub fn plan(date: &DateInfo) -> QueryPlan {
    let (y, m) = (date.year, date.month);
    Category::ALL
        .into_iter()
        .map(|category| {
            let queries = match category {
                Category::Highlights => vec![
                    format!("AI人工智能 重大突破 {y}年{m}月"),
                    format!("OpenAI ChatGPT GPT-5 最新发布 {y}"),
                    format!("AI大模型 发布 新闻 {y}年{m}月"),
                    "DeepSeek Claude Gemini 最新动态".to_string(),
                ],
                Category::VipNews => vec![
                    format!("Sam Altman OpenAI 最新发言 {y}"),
                    format!("黄仁勋 Jensen Huang NVIDIA 演讲 {y}"),
                    format!("马斯克 Elon Musk AI xAI {y}"),
                    format!("李彦宏 百度 文心一言 {y}"),
                ],
                Category::FinanceNews => vec![
                    format!("AI金融 银行 大模型应用 {y}年{m}月"),
                    format!("人工智能 量化交易 投资 {y}"),
                    format!("AI风控 智能投顾 金融科技 {y}"),
                ],
                Category::GlobalNews => vec![
                    format!("AI芯片 GPU 算力 最新 {y}年{m}月"),
                    format!("人工智能 融资 独角兽 {y}"),
                    format!("AI产品 发布会 科技公司 {y}年{m}月"),
                ],
            };
            (category, queries)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date() -> DateInfo {
        DateInfo::from_datetime(
            NaiveDate::from_ymd_opt(2026, 4, 9)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_plan_covers_every_category_in_order() {
        let plan = plan(&date());
        let categories: Vec<_> = plan.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, Category::ALL.to_vec());

        let sizes: Vec<_> = plan.iter().map(|(_, q)| q.len()).collect();
        assert_eq!(sizes, vec![4, 4, 3, 3]);
    }

    #[test]
    fn test_queries_embed_year_and_month() {
        let plan = plan(&date());
        let (_, highlights) = &plan[0];
        assert_eq!(highlights[0], "AI人工智能 重大突破 2026年4月");
        assert_eq!(highlights[3], "DeepSeek Claude Gemini 最新动态");

        let (_, vip) = &plan[1];
        assert!(vip.iter().all(|q| q.ends_with("2026")));

        let (_, global) = &plan[3];
        assert_eq!(global[2], "AI产品 发布会 科技公司 2026年4月");
    }
}
