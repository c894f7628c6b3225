use leptos::prelude::*;

/// Glyph icons used across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AlertCircle,
    ArrowLeft,
    ArrowRight,
    Bot,
    Calendar,
    CheckCircle,
    Code,
    DollarSign,
    Download,
    ExternalLink,
    File,
    FileText,
    Image,
    Lightbulb,
    Mail,
    MessageSquare,
    Phone,
    Search,
    Send,
    Tag,
    Target,
    TrendingDown,
    TrendingUp,
    Upload,
    Users,
    X,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::AlertCircle => "\u{26A0}",
            Icon::ArrowLeft => "\u{2190}",
            Icon::ArrowRight => "\u{2192}",
            Icon::Bot => "\u{1F916}",
            Icon::Calendar => "\u{1F4C5}",
            Icon::CheckCircle => "\u{2714}",
            Icon::Code => "</>",
            Icon::DollarSign => "$",
            Icon::Download => "\u{2B07}",
            Icon::ExternalLink => "\u{2197}",
            Icon::File => "\u{1F5CB}",
            Icon::FileText => "\u{1F4C4}",
            Icon::Image => "\u{1F5BC}",
            Icon::Lightbulb => "\u{1F4A1}",
            Icon::Mail => "\u{2709}",
            Icon::MessageSquare => "\u{1F4AC}",
            Icon::Phone => "\u{260E}",
            Icon::Search => "\u{1F50D}",
            Icon::Send => "\u{27A4}",
            Icon::Tag => "\u{1F3F7}",
            Icon::Target => "\u{1F3AF}",
            Icon::TrendingDown => "\u{2198}",
            Icon::TrendingUp => "\u{2197}",
            Icon::Upload => "\u{2B06}",
            Icon::Users => "\u{1F465}",
            Icon::X => "\u{2715}",
            Icon::Zap => "\u{26A1}",
        }
    }
}

#[component]
pub fn IconGlyph(
    icon: Icon,
    /// Extra classes, e.g. a colour class
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <span class=format!("icon {}", class) aria-hidden="true">{icon.glyph()}</span>
    }
}
