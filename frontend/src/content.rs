//! Static copy and call-to-action targets for the hero section.

use crate::components::{ButtonVariant, Icon};
use crate::config::{DEMO_VIDEO_URL, USE_CASE_ROUTE};

/// Where a call to action leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionTarget {
    /// Client-side route inside the app.
    Route(&'static str),
    /// Off-site URL, opened in a new isolated browsing context.
    External(&'static str),
}

impl ActionTarget {
    /// `rel` for new-context links: the opened page gets no `window.opener`
    /// and no referrer.
    pub const EXTERNAL_REL: &'static str = "noopener noreferrer";

    pub fn href(&self) -> &'static str {
        match self {
            ActionTarget::Route(path) | ActionTarget::External(path) => *path,
        }
    }

    pub fn opens_new_context(&self) -> bool {
        matches!(self, ActionTarget::External(_))
    }

    pub fn target_attr(&self) -> Option<&'static str> {
        self.opens_new_context().then_some("_blank")
    }

    pub fn rel_attr(&self) -> Option<&'static str> {
        self.opens_new_context().then_some(Self::EXTERNAL_REL)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: ActionTarget,
    pub variant: ButtonVariant,
    pub icon: Icon,
    /// Extra classes layered over the variant's look.
    pub class: &'static str,
}

/// Inline emphasis inside the description paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// Brighter, medium weight.
    Subtle,
    /// Accent colour, bold.
    Accent,
}

impl Emphasis {
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::Subtle => "hero-em-subtle",
            Emphasis::Accent => "hero-em-accent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyFragment {
    Plain(&'static str),
    Emphasized(&'static str, Emphasis),
}

impl CopyFragment {
    pub fn text(&self) -> &'static str {
        match self {
            CopyFragment::Plain(text) | CopyFragment::Emphasized(text, _) => *text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroCopy {
    pub badge: &'static str,
    pub headline_lead: &'static str,
    /// Second headline line, drawn with the gradient fill.
    pub headline_accent: &'static str,
    pub description: &'static [CopyFragment],
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

impl HeroCopy {
    /// Both actions, primary first.
    pub fn actions(&self) -> [CallToAction; 2] {
        [self.primary, self.secondary]
    }

    /// Description paragraph as plain text.
    pub fn description_text(&self) -> String {
        self.description.iter().map(CopyFragment::text).collect()
    }
}

pub const HERO_COPY: HeroCopy = HeroCopy {
    badge: "System Online: Agentic Protocol V2.0",
    headline_lead: "AI-Powered Repurposing.",
    headline_accent: "Faster. Smarter. Reliable.",
    description: &[
        CopyFragment::Plain(
            "Accelerate drug discovery with our multi-agent autonomous system. Transforming ",
        ),
        CopyFragment::Emphasized("12 weeks", Emphasis::Subtle),
        CopyFragment::Plain(" of manual research into "),
        CopyFragment::Emphasized("2 weeks", Emphasis::Accent),
        CopyFragment::Plain(" of actionable insights."),
    ],
    primary: CallToAction {
        label: "Start Research",
        target: ActionTarget::Route(USE_CASE_ROUTE),
        variant: ButtonVariant::Primary,
        icon: Icon::ArrowRight,
        class: "cta-glow",
    },
    secondary: CallToAction {
        label: "Watch Demo",
        target: ActionTarget::External(DEMO_VIDEO_URL),
        variant: ButtonVariant::Outline,
        icon: Icon::PlayCircle,
        class: "cta-glass",
    },
};
