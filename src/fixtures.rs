//! Hard-coded display data.
//!
//! Everything here stands in for results a real assistant would compute.
//! The UI only reads these tables.

use crate::components::icon::Icon;
use crate::models::{
    AnalysisSummary, BudgetCategory, ChatMessage, Insight, InsightKind, MonthlyTotal, Service,
    SpendingCategory, Speaker, Stat, Trend,
};

pub const SERVICES: &[Service] = &[
    Service {
        icon: Icon::Code,
        title: "Web Development",
        description: "Responsive websites, e-commerce platforms, and landing pages that convert",
        features: &["React & Next.js", "E-commerce Solutions", "Mobile-First Design"],
    },
    Service {
        icon: Icon::Bot,
        title: "AI Chatbots & Automation",
        description: "Intelligent bots and automation systems to streamline your business",
        features: &["Custom AI Chatbots", "Workflow Automation", "24/7 Customer Support"],
    },
    Service {
        icon: Icon::MessageSquare,
        title: "Social Media & Content",
        description: "Strategic content creation and social media optimization",
        features: &["Content Strategy", "Social Media Management", "Brand Storytelling"],
    },
    Service {
        icon: Icon::Search,
        title: "SEO & Growth Strategy",
        description: "Data-driven SEO and growth strategies to boost your online presence",
        features: &["Technical SEO", "Keyword Research", "Growth Hacking"],
    },
    Service {
        icon: Icon::Lightbulb,
        title: "Business Consulting & Ideas",
        description: "Transform your ideas into profitable business strategies",
        features: &["Business Planning", "Market Research", "Strategy Development"],
    },
    Service {
        icon: Icon::TrendingUp,
        title: "Marketing Strategy",
        description: "Comprehensive marketing campaigns that drive real results",
        features: &["Digital Campaigns", "Performance Marketing", "ROI Optimization"],
    },
];

// -- Upload results --

pub const SUMMARY: AnalysisSummary = AnalysisSummary {
    total_transactions: 147,
    total_amount: 4821.32,
    avg_transaction: 32.79,
    time_range: "March 2024",
};

pub const INSIGHTS: &[Insight] = &[
    Insight {
        kind: InsightKind::Warning,
        title: "High Dining Expenses",
        description: "Dining expenses are 47% above your typical spending",
        amount: "$687.42",
        recommendation: "Consider meal planning to reduce dining costs by $200/month",
    },
    Insight {
        kind: InsightKind::Success,
        title: "Improved Savings Rate",
        description: "Your savings rate increased by 12% compared to last month",
        amount: "$345.18",
        recommendation: "Great job! Consider increasing your emergency fund target",
    },
    Insight {
        kind: InsightKind::Info,
        title: "Subscription Analysis",
        description: "Found 3 recurring subscriptions totaling $47.97/month",
        amount: "$47.97",
        recommendation: "Review and cancel unused subscriptions to save annually",
    },
];

pub const CATEGORIES: &[SpendingCategory] = &[
    SpendingCategory { name: "Dining & Food", amount: 687.42, percentage: 14.3, trend: Trend::Up },
    SpendingCategory { name: "Groceries", amount: 432.18, percentage: 9.0, trend: Trend::Down },
    SpendingCategory { name: "Transportation", amount: 234.56, percentage: 4.9, trend: Trend::Stable },
    SpendingCategory { name: "Utilities", amount: 156.78, percentage: 3.3, trend: Trend::Stable },
    SpendingCategory { name: "Entertainment", amount: 98.42, percentage: 2.0, trend: Trend::Up },
];

pub const MONTHLY_TREND: &[MonthlyTotal] = &[
    MonthlyTotal { month: "Jan", amount: 4234.0 },
    MonthlyTotal { month: "Feb", amount: 3987.0 },
    MonthlyTotal { month: "Mar", amount: 4821.0 },
];

// -- Dashboard --

pub const STATS: &[Stat] = &[
    Stat {
        icon: Icon::DollarSign,
        label: "Total Balance",
        value: "$12,450.32",
        change: "+2.5% from last month",
        positive: true,
    },
    Stat {
        icon: Icon::TrendingDown,
        label: "Monthly Spending",
        value: "$4,821.32",
        change: "+20.9% from last month",
        positive: false,
    },
    Stat {
        icon: Icon::Target,
        label: "Savings Goal",
        value: "68%",
        change: "$6,800 of $10,000",
        positive: true,
    },
    Stat {
        icon: Icon::Calendar,
        label: "Bills Due",
        value: "3",
        change: "Next: Rent on the 1st",
        positive: true,
    },
];

pub const DASHBOARD_INSIGHTS: &[Insight] = &[
    Insight {
        kind: InsightKind::Warning,
        title: "Dining Budget Exceeded",
        description: "You have spent more on dining out than planned this month",
        amount: "$187.42",
        recommendation: "Cook at home two extra nights a week to get back on track",
    },
    Insight {
        kind: InsightKind::Success,
        title: "Emergency Fund Growing",
        description: "You added to your emergency fund three months in a row",
        amount: "$345.18",
        recommendation: "Automate the transfer so it happens on payday",
    },
    Insight {
        kind: InsightKind::Info,
        title: "Upcoming Renewal",
        description: "Your annual software subscription renews in 9 days",
        amount: "$119.00",
        recommendation: "Decide now whether you still use it",
    },
];

pub const BUDGETS: &[BudgetCategory] = &[
    BudgetCategory { name: "Housing", spent: 1500.0, limit: 1500.0 },
    BudgetCategory { name: "Dining & Food", spent: 687.42, limit: 500.0 },
    BudgetCategory { name: "Groceries", spent: 432.18, limit: 600.0 },
    BudgetCategory { name: "Transportation", spent: 234.56, limit: 350.0 },
    BudgetCategory { name: "Entertainment", spent: 98.42, limit: 200.0 },
];

pub const CHAT_TRANSCRIPT: &[ChatMessage] = &[
    ChatMessage {
        speaker: Speaker::Assistant,
        text: "Hi! I'm FinBot. Ask me about your spending, budgets, or savings goals.",
    },
    ChatMessage {
        speaker: Speaker::User,
        text: "How am I doing on dining this month?",
    },
    ChatMessage {
        speaker: Speaker::Assistant,
        text: "You're $187 over your dining budget. Upload last month's statement and I'll look for patterns.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_service_has_three_features() {
        assert_eq!(SERVICES.len(), 6);
        for service in SERVICES {
            assert_eq!(service.features.len(), 3, "{}", service.title);
        }
    }

    #[test]
    fn test_insights_cover_every_kind() {
        for insights in [INSIGHTS, DASHBOARD_INSIGHTS] {
            for kind in [InsightKind::Warning, InsightKind::Success, InsightKind::Info] {
                assert!(insights.iter().any(|i| i.kind == kind));
            }
        }
    }

    #[test]
    fn test_dining_budget_is_over() {
        let dining = BUDGETS.iter().find(|b| b.name == "Dining & Food").unwrap();
        assert!(dining.is_over());
        assert_eq!(dining.percent_used(), 100.0);
    }
}
