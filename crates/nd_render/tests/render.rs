use chrono::NaiveDate;
use nd_core::{Category, DateInfo, NewsCollection, SearchResult};
use nd_render::{render_page, VIP_FIGURES};

fn date() -> DateInfo {
    DateInfo::from_datetime(
        NaiveDate::from_ymd_opt(2026, 2, 3)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap(),
    )
}

fn results(prefix: &str, count: usize) -> Vec<SearchResult> {
    (1..=count)
        .map(|i| SearchResult::new(format!("{prefix} {i}"), format!("https://{prefix}.example/{i}")))
        .collect()
}

/// Text between the first `start` marker and the following `end` marker.
fn section<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html.find(start).expect("section start present");
    let len = html[from..].find(end).expect("section end present");
    &html[from..from + len]
}

const FIXED_MARKERS: &[&str] = &[
    "<!DOCTYPE html>",
    "<style>",
    "<header>",
    "<nav>",
    r#"<section class="key-points">"#,
    r#"<section class="vip-section" id="vip">"#,
    "市场数据概览",
    r#"<section class="finance-section" id="finance">"#,
    r#"<section id="products">"#,
    "<footer>",
    "function updateCountdown()",
    "</html>\n",
];

#[test]
fn test_empty_collection_renders_every_section() {
    let html = render_page(&NewsCollection::new(), &date());

    for marker in FIXED_MARKERS {
        assert!(html.contains(marker), "missing {marker}");
    }
    assert_eq!(html.matches("<li>").count(), 0);
    assert_eq!(html.matches(r#"<div class="quote-card">"#).count(), 0);
    assert_eq!(html.matches(r#"<article class="news-card">"#).count(), 0);
    assert!(html.ends_with("</body>\n</html>\n"));
}

#[test]
fn test_render_is_deterministic() {
    let mut news = NewsCollection::new();
    for category in Category::ALL {
        news.extend(category, results(category.as_str(), 8));
    }
    assert_eq!(render_page(&news, &date()), render_page(&news, &date()));
}

#[test]
fn test_two_highlights_are_both_urgent() {
    let mut news = NewsCollection::new();
    news.extend(
        Category::Highlights,
        vec![SearchResult::new("A", "http://a"), SearchResult::new("B", "http://b")],
    );
    let html = render_page(&news, &date());
    let key_points = section(&html, r#"<section class="key-points">"#, "</section>");

    assert_eq!(key_points.matches("<li>").count(), 2);
    assert_eq!(key_points.matches(r#"<span class="point-tag urgent">重磅</span>"#).count(), 2);
    assert_eq!(key_points.matches(r#"href="http://a""#).count(), 2);
    assert_eq!(key_points.matches(r#"href="http://b""#).count(), 2);
    assert!(key_points.contains("<strong>A</strong>"));
    assert!(key_points.find("<strong>A</strong>") < key_points.find("<strong>B</strong>"));
}

#[test]
fn test_key_points_capped_and_tagged_by_position() {
    let mut news = NewsCollection::new();
    news.extend(Category::Highlights, results("h", 9));
    let html = render_page(&news, &date());
    let key_points = section(&html, r#"<section class="key-points">"#, "</section>");

    assert_eq!(key_points.matches("<li>").count(), 6);
    assert_eq!(key_points.matches("point-tag urgent").count(), 2);
    assert_eq!(key_points.matches("point-tag new").count(), 2);
    assert_eq!(key_points.matches(r#"<span class="point-tag ">关注</span>"#).count(), 2);
    assert!(key_points.contains(r#"<span class="bullet">6</span>"#));
    assert!(!key_points.contains("h 7"));
}

#[test]
fn test_vip_cards_pair_by_position() {
    let mut news = NewsCollection::new();
    news.extend(Category::VipNews, results("vip", 2));
    let html = render_page(&news, &date());
    let vip = section(&html, r#"<section class="vip-section""#, "</section>");

    assert_eq!(vip.matches(r#"<div class="quote-card">"#).count(), 2);
    assert!(vip.contains(r#"<div class="author-avatar">SA</div>"#));
    assert!(vip.contains(r#"<div class="author-avatar">JH</div>"#));
    assert!(!vip.contains("Sundar Pichai"));
    assert!(vip.find("Sam Altman") < vip.find("vip 1"));
    assert!(vip.find("vip 1") < vip.find("Jensen Huang"));
    assert!(vip.contains("<span>2月</span>"));
}

#[test]
fn test_vip_cards_never_exceed_figures() {
    let mut news = NewsCollection::new();
    news.extend(Category::VipNews, results("vip", 7));
    let html = render_page(&news, &date());

    assert_eq!(html.matches(r#"<div class="quote-card">"#).count(), VIP_FIGURES.len());
    assert!(!html.contains("vip 5"));
}

#[test]
fn test_news_grids_capped_at_six() {
    let mut news = NewsCollection::new();
    news.extend(Category::FinanceNews, results("fin", 8));
    news.extend(Category::GlobalNews, results("glob", 3));
    let html = render_page(&news, &date());

    let finance = section(&html, r#"<section class="finance-section""#, "</section>");
    assert_eq!(finance.matches(r#"<article class="news-card">"#).count(), 6);
    assert_eq!(finance.matches("category-finance").count(), 6);
    assert!(!finance.contains("fin 7"));

    let global = section(&html, r#"<section id="products">"#, "</section>");
    assert_eq!(global.matches(r#"<article class="news-card">"#).count(), 3);
    assert!(global.contains(r#"<a href="https://glob.example/3" target="_blank">glob 3</a>"#));
}

#[test]
fn test_nav_links_point_at_sections() {
    let html = render_page(&NewsCollection::new(), &date());
    let nav = section(&html, "<nav>", "</nav>");

    assert!(nav.contains(r##"<a class="nav-link active" href="#all">全部资讯</a>"##));
    assert!(nav.contains(r##"<a class="nav-link hot" href="#vip">大咖言论</a>"##));
    assert!(nav.contains(r##"<a class="nav-link" href="#finance">金融应用</a>"##));
    assert!(nav.contains(r##"<a class="nav-link" href="#products">产品发布</a>"##));
    assert!(nav.contains(r##"<a class="nav-link" href="#global">全球动态</a>"##));
    assert_eq!(nav.matches(r#"<a class="nav-link"#).count(), 5);
    // Header markup continues past the nav into the page body.
    assert!(html.find("</nav>") < html.find(r#"<section class="key-points">"#));
}

#[test]
fn test_dates_in_header_and_footer() {
    let html = render_page(&NewsCollection::new(), &date());

    assert!(html.contains("<span>最后更新: 2026年2月3日 08:15</span>"));
    assert!(html.contains("本周关注: 1月28日 - 2月3日"));
    assert!(html.contains("本周核心要点 (1月28日-2月3日)"));
    assert!(html.contains("&copy; 2026 AI资讯中心 | 最后更新: 2026年2月3日 |"));
}

#[test]
fn test_titles_are_not_escaped() {
    let mut news = NewsCollection::new();
    news.extend(Category::GlobalNews, vec![SearchResult::new("R&D <b>x</b>", "http://x?a=1&b=2")]);
    let html = render_page(&news, &date());

    assert!(html.contains("R&D <b>x</b>"));
    assert!(html.contains(r#"href="http://x?a=1&b=2""#));
}

#[test]
fn test_other_categories_do_not_leak_into_sections() {
    let mut news = NewsCollection::new();
    news.extend(Category::GlobalNews, results("glob", 2));
    let html = render_page(&news, &date());

    let key_points = section(&html, r#"<section class="key-points">"#, "</section>");
    assert!(!key_points.contains("glob"));
    let finance = section(&html, r#"<section class="finance-section""#, "</section>");
    assert!(!finance.contains("glob"));
}
