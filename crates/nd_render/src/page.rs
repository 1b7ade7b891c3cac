use std::fmt::{self, Write};

use nd_core::{Category, DateInfo, NewsCollection, SearchResult};

use crate::figures::{Figure, VIP_FIGURES};

const STYLE: &str = include_str!("assets/style.css");
const COUNTDOWN_SCRIPT: &str = include_str!("assets/countdown.js");

/// Items shown in the key points list and in each news grid.
pub const SECTION_LIMIT: usize = 6;

/// The complete static page for one run.
///
/// Titles and URLs are written verbatim, without HTML escaping.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    news: &'a NewsCollection,
    date: &'a DateInfo,
}

impl<'a> Page<'a> {
    pub fn new(news: &'a NewsCollection, date: &'a DateInfo) -> Self {
        Self { news, date }
    }

    fn write_head(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"zh-CN\">\n",
            "<head>\n",
            "    <meta charset=\"UTF-8\">\n",
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
            "    <title>AI资讯中心 | 全球人工智能与金融科技动态</title>\n",
            "    <style>\n",
        ))?;
        f.write_str(STYLE)?;
        f.write_str("    </style>\n</head>\n<body>\n")
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.date;
        write!(
            f,
            r##"    <header>
        <div class="container">
            <div class="header-content">
                <div class="logo">
                    <div class="logo-icon">AI</div>
                    <div>
                        <h1>AI资讯中心</h1>
                        <span style="color: var(--text-secondary); font-size: 0.8rem;">全球人工智能与金融科技动态</span>
                    </div>
                </div>
                <div class="header-right">
                    <div class="next-update">
                        <div class="next-update-label">下次自动更新</div>
                        <div class="countdown" id="countdown">--:--:--</div>
                    </div>
                    <div class="update-info">
                        <div class="update-time">
                            <span class="live-dot"></span>
                            <span>最后更新: {formatted} {time}</span>
                        </div>
                        <div class="week-range">本周关注: {wsm}月{wsd}日 - {m}月{d}日</div>
                        <div class="auto-update-badge">每日自动更新</div>
                    </div>
                </div>
            </div>
        </div>
    </header>

    <nav>
        <div class="container">
            <div class="nav-links">
                <a class="nav-link active" href="#all">全部资讯</a>
                <a class="nav-link hot" href="#vip">大咖言论</a>
                <a class="nav-link" href="#finance">金融应用</a>
                <a class="nav-link" href="#products">产品发布</a>
                <a class="nav-link" href="#global">全球动态</a>
            </div>
        </div>
    </nav>

"##,
            formatted = date.formatted,
            time = date.time,
            wsm = date.week_start_month,
            wsd = date.week_start_day,
            m = date.month,
            d = date.day,
        )
    }

    fn write_key_points(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.date;
        write!(
            f,
            r#"        <!-- Key Points -->
        <section class="key-points">
            <h3>&#128161; 本周核心要点 ({}月{}日-{}月{}日)</h3>
            <ul>
"#,
            d.week_start_month, d.week_start_day, d.month, d.day
        )?;

        let highlights = self.news.get(Category::Highlights);
        for (i, item) in highlights.iter().take(SECTION_LIMIT).enumerate() {
            let position = i + 1;
            let tag = PointTag::for_position(position);
            write!(
                f,
                r#"                <li>
                    <span class="bullet">{position}</span>
                    <span class="point-text">
                        <a href="{url}" target="_blank" style="color: inherit; text-decoration: none;"><strong>{title}</strong></a>
                        <span class="point-tag {class}">{label}</span>
                        <a href="{url}" target="_blank" class="point-link">阅读原文 &#8594;</a>
                    </span>
                </li>
"#,
                url = item.url,
                title = item.title,
                class = tag.class(),
                label = tag.label(),
            )?;
        }

        f.write_str("            </ul>\n        </section>\n\n")
    }

    fn write_vip_quotes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            r#"        <!-- VIP Quotes -->
        <section class="vip-section" id="vip">
            <div class="section-title">
                <h2>&#127775; AI大咖言论</h2>
                <span class="badge hot">本周热点</span>
            </div>
            <div class="quotes-grid">
"#,
        )?;

        // Pairing is by position only; entry i is not known to concern figure i.
        let vip_news = self.news.get(Category::VipNews);
        for (figure, item) in VIP_FIGURES.iter().zip(vip_news) {
            self.write_quote_card(f, figure, item)?;
        }

        f.write_str("            </div>\n        </section>\n\n")
    }

    fn write_quote_card(
        &self,
        f: &mut fmt::Formatter<'_>,
        figure: &Figure,
        item: &SearchResult,
    ) -> fmt::Result {
        write!(
            f,
            r#"                <div class="quote-card">
                    <div class="quote-author">
                        <div class="author-avatar">{avatar}</div>
                        <div class="author-info">
                            <h4>{name}</h4>
                            <span>{role}</span>
                        </div>
                    </div>
                    <p class="quote-text">{title}</p>
                    <div class="quote-meta">
                        <span>{month}月</span>
                        <a href="{url}" target="_blank" class="quote-source">查看来源</a>
                    </div>
                </div>
"#,
            avatar = figure.avatar,
            name = figure.name,
            role = figure.role,
            title = item.title,
            month = self.date.month,
            url = item.url,
        )
    }

    fn write_stats(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            r#"        <!-- Stats -->
        <section>
            <div class="section-title">
                <h2>&#128202; 市场数据概览</h2>
            </div>
            <div class="stats-grid">
                <div class="stat-card">
                    <div class="stat-value">$2.5T+</div>
                    <div class="stat-label">2026年AI支出预测</div>
                    <div class="stat-change up">持续增长</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">85%+</div>
                    <div class="stat-label">企业采用AI</div>
                    <div class="stat-change">全球趋势</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">40%</div>
                    <div class="stat-label">工作岗位受影响</div>
                    <div class="stat-change">IMF预测</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">24/7</div>
                    <div class="stat-label">实时更新</div>
                    <div class="stat-change">自动抓取</div>
                </div>
            </div>
        </section>

"#,
        )
    }

    fn write_finance(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            r#"        <!-- Finance Section -->
        <section class="finance-section" id="finance">
            <div class="section-title">
                <h2>&#128176; AI金融行业应用</h2>
                <span class="badge">重点关注</span>
            </div>
            <div class="news-grid">
"#,
        )?;
        for item in self.news.get(Category::FinanceNews).iter().take(SECTION_LIMIT) {
            self.write_news_card(f, &FINANCE_CARD, item)?;
        }
        f.write_str("            </div>\n        </section>\n\n")
    }

    fn write_global(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            r#"        <!-- Global AI News -->
        <section id="products">
            <div class="section-title">
                <h2>&#127758; 全球AI产品与技术动态</h2>
            </div>
            <div class="news-grid">
"#,
        )?;
        for item in self.news.get(Category::GlobalNews).iter().take(SECTION_LIMIT) {
            self.write_news_card(f, &GLOBAL_CARD, item)?;
        }
        f.write_str("            </div>\n        </section>\n    </main>\n\n")
    }

    fn write_news_card(
        &self,
        f: &mut fmt::Formatter<'_>,
        style: &CardStyle,
        item: &SearchResult,
    ) -> fmt::Result {
        let mut date = String::new();
        if style.new_badge {
            date.push_str(r#"<span class="new-badge">NEW</span> "#);
        }
        write!(date, "{}月", self.date.month)?;

        write!(
            f,
            r#"                <article class="news-card">
                    <div class="news-card-header">
                        <span class="news-category {class}">{label}</span>
                        <span class="news-date">{date}</span>
                    </div>
                    <div class="news-card-body">
                        <h3><a href="{url}" target="_blank">{title}</a></h3>
                    </div>
                    <div class="news-card-footer">
                        <span class="news-source">
                            <span class="source-icon">AI</span>
                            {source}
                        </span>
                        <a href="{url}" target="_blank" class="read-more">阅读原文 &#8594;</a>
                    </div>
                </article>
"#,
            class = style.class,
            label = style.label,
            url = item.url,
            title = item.title,
            source = style.source,
        )
    }

    fn write_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"    <footer>
        <div class="container">
            <div class="footer-content">
                <div class="footer-section">
                    <h4>关于本站</h4>
                    <p>AI资讯中心汇集全球最新人工智能资讯，重点关注金融行业应用和大咖言论。</p>
                    <p style="margin-top: 12px; color: var(--accent);">每日自动更新 | 关注周期: 最近7天</p>
                </div>
                <div class="footer-section">
                    <h4>资讯来源</h4>
                    <a href="https://www.cnbc.com" target="_blank">CNBC</a>
                    <a href="https://techcrunch.com" target="_blank">TechCrunch</a>
                    <a href="https://www.reuters.com" target="_blank">Reuters</a>
                    <a href="https://www.bloomberg.com" target="_blank">Bloomberg</a>
                </div>
                <div class="footer-section">
                    <h4>免责声明</h4>
                    <p>内容由自动化程序整理生成</p>
                    <p>仅供参考，不构成投资建议</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>&copy; {year} AI资讯中心 | 最后更新: {formatted} | GitHub Actions 自动更新</p>
            </div>
        </div>
    </footer>

"#,
            year = self.date.year,
            formatted = self.date.formatted,
        )
    }

    fn write_script(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("    <script>\n")?;
        f.write_str(COUNTDOWN_SCRIPT)?;
        f.write_str("    </script>\n</body>\n</html>\n")
    }
}

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_head(f)?;
        self.write_header(f)?;
        f.write_str("    <main class=\"container\">\n")?;
        self.write_key_points(f)?;
        self.write_vip_quotes(f)?;
        self.write_stats(f)?;
        self.write_finance(f)?;
        self.write_global(f)?;
        self.write_footer(f)?;
        self.write_script(f)
    }
}

/// Tag attached to a key point, chosen purely by its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointTag {
    Urgent,
    New,
    Watch,
}

impl PointTag {
    pub fn for_position(position: usize) -> Self {
        match position {
            0..=2 => PointTag::Urgent,
            3..=4 => PointTag::New,
            _ => PointTag::Watch,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PointTag::Urgent => "urgent",
            PointTag::New => "new",
            PointTag::Watch => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PointTag::Urgent => "重磅",
            PointTag::New => "新闻",
            PointTag::Watch => "关注",
        }
    }
}

struct CardStyle {
    class: &'static str,
    label: &'static str,
    source: &'static str,
    new_badge: bool,
}

const FINANCE_CARD: CardStyle = CardStyle {
    class: "category-finance",
    label: "金融",
    source: "AI News",
    new_badge: true,
};

const GLOBAL_CARD: CardStyle = CardStyle {
    class: "category-tech",
    label: "科技",
    source: "Tech News",
    new_badge: false,
};
