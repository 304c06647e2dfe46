//! Static portfolio case studies.
//!
//! The catalogue is compiled in and immutable at runtime. Pages look entries
//! up by slug; an unknown slug is a not-found outcome for the caller.

/// A portfolio case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub slug: &'static str,
    pub title: &'static str,
    /// Hero image path.
    pub image: &'static str,
    pub industry: &'static str,
    pub services: &'static [&'static str],
    pub problem: &'static str,
    pub approach: &'static str,
    pub results: &'static str,
    pub problem_image: Option<&'static str>,
    pub approach_image: Option<&'static str>,
    pub results_image: Option<&'static str>,
}

/// Find a case study by slug.
pub fn find(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|cs| cs.slug == slug)
}

/// All case studies in catalogue order.
pub fn all() -> &'static [CaseStudy] {
    CASE_STUDIES
}

static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "marketing-roi",
        title: "Boosting Marketing ROI",
        image: "/case-studies/marketing_roi.png",
        industry: "Marketing",
        services: &["AI / ML Dashboards"],
        problem: "Low visibility into campaign performance across channels.",
        approach: "We started by auditing every channel the client was using\u{2014}paid search, paid social, email, and display\u{2014}to understand where data lived and how it was being reported. From there, we designed a unified tracking plan and stitched data together into a single warehouse so every impression, click and conversion was aligned to the same customer and campaign model. On top of this, we built an AI-powered dashboard that highlighted under- and over-performing segments, surfaced budget-reallocation suggestions, and allowed the marketing team to simulate \u{2018}what-if\u{2019} scenarios before changing spend.",
        results: "Improved ROI by 35% and reduced reporting time by 80%.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "process-automation",
        title: "Process Automation",
        image: "/case-studies/automation.png",
        industry: "Manufacturing",
        services: &["Automation Tools"],
        problem: "Manual order processing causing delays and errors.",
        approach: "Together with the client\u{2019}s operations team, we mapped the end-to-end order journey\u{2014}from quote to fulfilment\u{2014}to spot every manual handoff and repetitive task. We then introduced a set of automation scripts and workflow rules that pulled orders directly from their CRM, validated them against inventory and pricing policies, and pushed clean data into the existing ERP system. Human review was reserved only for exceptions, with a clear dashboard that showed bottlenecks, error trends, and where further automation would have the most impact.",
        results: "Reduced processing time by 70% and decreased errors by 90%.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "data-scraping-case",
        title: "Scalable Data Scraping",
        image: "/case-studies/data_scraping.png",
        industry: "Retail",
        services: &["Data Scraping Based on Client Criteria"],
        problem: "The client needed to aggregate pricing data from hundreds of ecommerce sites daily.",
        approach: "We began by working with the client\u{2019}s pricing team to define exactly which products, competitors and attributes mattered most, turning a vague \u{2018}scrape everything\u{2019} request into a focused, high-value spec. Next, we engineered a resilient scraping infrastructure using rotating proxies, headless browsers, and site-specific adapters to cope with changing layouts and anti-bot protections. The raw data was normalised into a consistent schema and loaded into a central warehouse, where we added automated quality checks and alerting so the team could instantly see when competitors changed prices or launched new SKUs.",
        results: "Enabled dynamic pricing updates and competitive analysis leading to a 20% margin increase.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "data-analytics-visualization-case",
        title: "Real-Time Analytics Dashboards",
        image: "/case-studies/data_analytics.png",
        industry: "SaaS",
        services: &["Data Analysis & Visualization"],
        problem: "Executives lacked a single source of truth for KPIs across departments.",
        approach: "We interviewed stakeholders from sales, product, marketing and customer success to collect their \u{2018}must-have\u{2019} metrics and uncover where existing reports conflicted. Based on that discovery, we modelled a shared set of definitions\u{2014}what a lead, opportunity, active user or churned customer actually meant\u{2014}and implemented them inside a modern data stack. Finally, we built interactive dashboards with drill-downs, cohort views and alerting, so leaders could jump from high-level KPIs into the underlying drivers in just a few clicks, without waiting for an analyst to run custom reports.",
        results: "Provided actionable insights that reduced decision making time by 40%.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "web-development-case",
        title: "Modern Web Platform",
        image: "/case-studies/web_development.png",
        industry: "Education",
        services: &["Web Development"],
        problem: "An outdated website was slow and difficult to update, hurting student enrolment.",
        approach: "We started with a UX workshop, reviewing analytics and student feedback to understand which pages truly influenced enquiries and applications. With that insight, we rebuilt the site using Next.js and a headless CMS, separating content from code so the marketing team could update programs, tuition and deadlines without developer help. We also optimised performance with image optimisation, caching and edge delivery, and wired in behavioural analytics to continuously test variations of landing pages, forms and calls-to-action.",
        results: "Page load times decreased by 60% and enrolment enquiries increased by 30%.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "graphics-design-case",
        title: "Brand Identity Refresh",
        image: "/case-studies/graphics_design.png",
        industry: "Hospitality",
        services: &["Graphics Design"],
        problem: "Inconsistent branding across channels weakened customer trust.",
        approach: "Our design team conducted a visual audit of every guest touchpoint\u{2014}website, menus, signage, booking emails and social feeds\u{2014}to spot mismatched logos, colours and tone of voice. We then collaborated with key stakeholders to define a refreshed brand story and visual language that reflected the venue\u{2019}s atmosphere and target audience. This became a practical brand kit: typography, colour palettes, layouts, photography guidelines and ready-to-use templates for social media, ensuring every future piece of communication felt recognisably \u{2018}on brand\u{2019}.",
        results: "Strengthened brand recognition and drove a 15% uplift in bookings.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "video-post-production-case",
        title: "Video Marketing Enhancement",
        image: "/case-studies/video_production.png",
        industry: "Tech",
        services: &["Video Post Production"],
        problem: "Raw product demo footage lacked polish and failed to engage prospects.",
        approach: "We sat down with the sales and product teams to understand the key objections they faced on calls and what a \u{2018}perfect\u{2019} demo would answer in the first 90 seconds. Using that insight, we re-structured the existing footage into a narrative that opened with customer pain, moved through the solution, and ended with strong proof points and a clear call-to-action. Motion graphics, on-screen annotations and subtle sound design were layered in to highlight important moments, while different cuts were produced for social, landing pages and webinar follow-ups.",
        results: "Increased viewer retention by 70% and doubled lead conversions.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "ai-automation-case",
        title: "Operational AI Automation",
        image: "/case-studies/ai_automation.png",
        industry: "Customer Support",
        services: &["AI Automation"],
        problem: "Support teams spent hours on repetitive triage and ticket routing.",
        approach: "We analysed several months of historical tickets to cluster common request types and identify which ones could be safely automated. Based on that analysis, we deployed AI agents capable of understanding incoming messages, classifying intent, and either answering directly using a controlled knowledge base or routing the ticket to the right queue with the correct priority. All automations were rolled out with careful safeguards\u{2014}easy human takeover, clear labelling and analytics\u{2014}so the support leadership could monitor impact, refine flows and gradually expand the range of tasks handled by AI.",
        results: "Reduced response times by 50% and freed up staff for higher value tasks.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "facebook-competitor-watchdog-case",
        title: "Ad Intelligence Watchdog",
        image: "/case-studies/watchdog.png",
        industry: "D2C",
        services: &["Facebook Competitor Watchdog"],
        problem: "The growth team was spending hours every week manually checking the Meta Ad Library to see what competitors were running. Screenshots lived in random Notion pages and Slack threads, there was no historical view of how creatives evolved over time, and nobody could confidently answer simple questions like: \"Which competitors are increasing spend right now?\" or \"Which hooks and formats are being tested most often?\" As a result, creative strategy was driven more by intuition than by a consistent, data-backed view of the competitive landscape.",
        approach: concat!(
            "We started by working with the team to define a practical scope for monitoring: a curated list of priority competitors, target markets, and product lines. From there, we configured our Facebook Competitor Watchdog (Facebook Analyzer) to continuously crawl the Meta Ad Library for those brands, normalising all retrieved ads into a clean structure with fields like objective, placement, format, language, and creative angle.\n\n",
            "Next, we built an opinionated tagging system that grouped creatives by hook (price vs. social proof vs. urgency), format (UGC, static, carousel, etc.) and funnel stage. This allowed the marketing team to go from a messy grid of random ads to focused views such as \"new UGC creatives launched this week\" or \"best-performing offer framings over the last 30 days\". Historical snapshots were stored so they could scroll back in time and see how messaging evolved ahead of big launches or seasonal pushes.\n\n",
            "On top of the data layer, we shipped a lightweight dashboard and alerting layer. Stakeholders could log into a simple web UI, filter by competitor or theme, and immediately see top creatives, frequency of new launches, and shifts in messaging. Weekly email digests summarised key changes\u{2014}new angles, unusually high creative volume from a competitor, or sudden pivots in offer strategy\u{2014}so the team didn\u{2019}t have to remember to \"check the tool\" every day. All of this plugged directly into their existing creative briefing process, turning the Facebook Analyzer into a starting point for every new batch of ad concepts.",
        ),
        results: concat!(
            "Within the first quarter, the team replaced ad-hoc competitor spying with a single, trusted source of truth for Facebook ad intelligence. Time spent on manual research dropped by roughly 80%, freeing strategists to focus on ideation instead of screenshots and spreadsheets.\n\n",
            "More importantly, creative testing became significantly sharper. By systematically borrowing proven hooks and formats\u{2014}and intentionally counter-positioning against weak competitor angles\u{2014}they increased win rate on new creative tests and saw a ~25\u{2013}30% lift in blended ROAS on campaigns influenced by insights from the Watchdog dashboard. The team also used historical data to catch early signs of competitor pushes (e.g., heavy discounting or new product launches) and adjust budgets and messaging before performance dipped, turning the Facebook Analyzer into an ongoing early-warning system rather than a one-off audit.",
        ),
        problem_image: Some("/case-studies/watchdog_problem.png"),
        approach_image: Some("/case-studies/watchdog_approach.png"),
        results_image: Some("/case-studies/watchdog_result.png"),
    },
    CaseStudy {
        slug: "ecommerce-package-case",
        title: "E-Commerce Transformation",
        image: "/case-studies/ecommerce_package.png",
        industry: "Retail",
        services: &["E-Commerce Package"],
        problem: "The client\u{2019}s store had poor UX and outdated integrations.",
        approach: "We first reviewed the full purchase funnel\u{2014}from homepage to post-purchase emails\u{2014}to pinpoint where customers dropped off and what friction they experienced. Then we migrated the store to a modern headless commerce stack, introducing a cleaner navigation, faster product search and a simplified, mobile-optimised checkout. Behind the scenes we integrated analytics, CRM and email automation so browsing behaviour, cart events and purchases automatically triggered relevant flows like abandoned-cart nudges, win-back campaigns and personalised recommendations.",
        results: "Improved conversion rates by 35% and reduced cart abandonment by 20%.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "business-email-solutions-case",
        title: "Enterprise Email Overhaul",
        image: "/case-studies/email_solutions.png",
        industry: "Professional Services",
        services: &["Business Email Solutions"],
        problem: "Frequent email outages and deliverability issues impacted client communication.",
        approach: "We conducted a technical review of the client\u{2019}s current mail setup\u{2014}DNS records, mail relays, inbox providers and security policies\u{2014}to identify misconfigurations and single points of failure. The environment was then rebuilt on a more reliable, scalable platform with enforced SPF, DKIM and DMARC, plus clear mailbox policies and admin controls for onboarding and off-boarding staff. Finally, we implemented monitoring and deliverability reporting so IT and leadership could see, in real time, how reliably messages were reaching client inboxes and where further tuning was needed.",
        results: "Achieved 99.99% uptime and improved sender reputation, leading to higher open rates.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
    CaseStudy {
        slug: "custom-build-case",
        title: "Custom Solution PoC",
        image: "/case-studies/custom_build.png",
        industry: "Start-up",
        services: &["Custom Build (Client Criteria)"],
        problem: "A unique business requirement couldn\u{2019}t be fulfilled by existing off-the-shelf products.",
        approach: "We kicked off with a focused discovery workshop to capture the startup\u{2019}s vision, constraints and success metrics, turning loose ideas into a clear, prioritised feature set. From there we designed a lightweight architecture and built a clickable prototype, validating key interactions and workflows with real users before writing production code. The final proof-of-concept was delivered as a small but robust product slice\u{2014}complete with documentation, roadmap suggestions and technical due diligence notes\u{2014}so the founders could confidently present both business value and technical feasibility to potential investors.",
        results: "Validated the concept within two weeks, enabling the start-up to secure investor funding.",
        problem_image: None,
        approach_image: None,
        results_image: None,
    },
];
