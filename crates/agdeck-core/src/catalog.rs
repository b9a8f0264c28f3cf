//! Static studio catalog
//!
//! Everything here is compiled in and never mutated. Views borrow from these
//! tables directly; nothing is cloned per frame.

/// Icon shown next to a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Web,
    Design,
    Video,
}

impl ServiceIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Web => "</>",
            ServiceIcon::Design => "✎",
            ServiceIcon::Video => "▶",
        }
    }
}

/// A named price tier on a service detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
}

/// Long-form content for the service detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDetails {
    pub headline: &'static str,
    pub subhead: &'static str,
    /// Rendered as "Services Included"
    pub features: &'static [&'static str],
    pub process: &'static [&'static str],
    pub pricing_plans: Option<&'static [PricingPlan]>,
    pub why_choose_us: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub icon: ServiceIcon,
    pub details: Option<ServiceDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_note: &'static str,
    pub address: &'static str,
}

/// A step of the studio's five-stage protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A named standard on the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standard {
    pub title: &'static str,
    pub description: &'static str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Data
// ─────────────────────────────────────────────────────────────────────────────

pub const STUDIO_NAME: &str = "AG Creatorz";

pub const HERO_HEADLINE: &str = "Building Digital Experiences That Stand Out";
pub const HERO_SUBHEAD: &str = "High-performance web development, graphic design, and video editing services focused on clarity, creativity, and quality.";

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "ag.creatorz.official@gmail.com",
    phone: "+91 89035 74460",
    phone_note: "WhatsApp Call & Message Only",
    address: "Chunkankadai, Nagercoil - 629 003, Kanyakumari Dist, Tamil Nadu, India",
};

pub static SERVICES: [Service; 3] = [
    Service {
        id: "web",
        title: "Web Engineering",
        description: "Developing blazing-fast, responsive, and SEO-optimized digital ecosystems that serve as the cornerstone of your online identity.",
        price: "From ₹2,500",
        icon: ServiceIcon::Web,
        details: Some(ServiceDetails {
            headline: "Advanced Web Solutions",
            subhead: "We build more than just websites. We engineer high-performance platforms that drive conversions and offer unparalleled user experiences.",
            features: &[
                "Custom React & Next.js Platforms",
                "High-Conversion Landing Pages",
                "Performance & SEO Optimization",
                "Interactive UI/UX Prototypes",
            ],
            process: &[
                "Brand DNA Discovery",
                "Wireframing & Logic Mapping",
                "Full-Stack Development",
                "Quality Assurance & Launch",
            ],
            pricing_plans: None,
            why_choose_us: Some(&[
                "Blazing fast load times",
                "Mobile-first philosophy",
                "Scalable clean code",
                "Strategic SEO integration",
            ]),
        }),
    },
    Service {
        id: "design",
        title: "Brand Design",
        description: "Crafting iconic visual identities and marketing collaterals that ensure your brand cuts through the digital noise with absolute clarity.",
        price: "From ₹500",
        icon: ServiceIcon::Design,
        details: Some(ServiceDetails {
            headline: "Visual Identity Design",
            subhead: "Strategic design that communicates value. We translate your brand's core mission into a cohesive and stunning visual language.",
            features: &[
                "Logos & Brand Identity Systems",
                "Strategic Social Media Assets",
                "Premium Thumbnails & Creatives",
                "Marketing & Print Collateral",
            ],
            process: &[
                "Visual Research & Moodboarding",
                "Conceptual Sketching",
                "Vector Refinement",
                "Asset Export & Guidelines",
            ],
            pricing_plans: None,
            why_choose_us: Some(&[
                "Unique, non-templated designs",
                "Consistent brand messaging",
                "High-impact visual strategy",
                "Market-ready deliverables",
            ]),
        }),
    },
    Service {
        id: "video",
        title: "Post-Production",
        description: "Transforming raw footage into engaging, cinematic narratives designed to maximize audience retention and social reach.",
        price: "From ₹1,000",
        icon: ServiceIcon::Video,
        details: Some(ServiceDetails {
            headline: "Cinematic Video Editing",
            subhead: "Storytelling refined. We use professional color grading, sound design, and motion graphics to make your content unforgettable.",
            features: &[
                "Viral Short-form (Reels/TikToks)",
                "High-Production YouTube Edits",
                "Commercial & Product Promos",
                "Motion Graphics & Titles",
            ],
            process: &[
                "Script & Pacing Analysis",
                "Dynamic Rough Cut",
                "Color Grading & SFX",
                "Final Render & Polish",
            ],
            pricing_plans: None,
            why_choose_us: Some(&[
                "Retention-focused editing",
                "Professional color science",
                "Custom sound landscapes",
                "Platform-specific optimization",
            ]),
        }),
    },
];

pub static PORTFOLIO_ITEMS: [PortfolioItem; 8] = [
    PortfolioItem {
        id: "1",
        title: "Ethereal Aesthetic",
        category: "Brand Design",
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe",
    },
    PortfolioItem {
        id: "2",
        title: "Nova FinTech",
        category: "Web Platforms",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71",
    },
    PortfolioItem {
        id: "3",
        title: "Urban Momentum",
        category: "Motion/Video",
        image: "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4",
    },
    PortfolioItem {
        id: "4",
        title: "Nexus Core",
        category: "Visual Identity",
        image: "https://images.unsplash.com/photo-1626785774573-4b799315345d",
    },
    PortfolioItem {
        id: "5",
        title: "Atlas Journey",
        category: "Web Design",
        image: "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8",
    },
    PortfolioItem {
        id: "6",
        title: "Velocity Reels",
        category: "Social Content",
        image: "https://images.unsplash.com/photo-1536240478700-b869070f9279",
    },
    PortfolioItem {
        id: "7",
        title: "Sphere Bio",
        category: "Modern UI",
        image: "https://images.unsplash.com/photo-1614850523296-d8c1af93d400",
    },
    PortfolioItem {
        id: "8",
        title: "Prism Logic",
        category: "Brand Design",
        image: "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4",
    },
];

/// Portfolio filter chips. The first entry matches everything.
pub const PORTFOLIO_CATEGORIES: [&str; 8] = [
    "All",
    "Brand Design",
    "Web Platforms",
    "Motion/Video",
    "Visual Identity",
    "Web Design",
    "Social Content",
    "Modern UI",
];

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        id: "1",
        name: "Vikram Malhotra",
        role: "Marketing Director",
        quote: "Akash understands the pulse of digital branding. The web platform he built for us became our primary engine for growth within weeks.",
    },
    Testimonial {
        id: "2",
        name: "Sarah Jenkins",
        role: "Content Creator",
        quote: "The attention to detail in their video editing is insane. My audience retention numbers have never been higher.",
    },
];

pub static FAQ_ITEMS: [FaqItem; 3] = [
    FaqItem {
        question: "What is your typical project timeline?",
        answer: "Timelines vary: Brand Design (5-10 days), Web Development (15-30 days), and Video Editing (2-4 days). We prioritize quality without compromising on efficiency.",
    },
    FaqItem {
        question: "How do you handle revisions?",
        answer: "We provide 3 major rounds of revisions for every project phase. Our goal is to ensure the final deliverable exceeds your initial expectations.",
    },
    FaqItem {
        question: "Do you offer post-launch support?",
        answer: "Yes, we provide 30 days of complimentary technical support for all web projects and are always available for future updates.",
    },
];

pub static PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        code: "SYS_INIT",
        title: "Discovery",
        description: "Analyzing brand DNA and architecture to define a roadmap.",
    },
    ProcessStep {
        code: "VIS_AUTH",
        title: "Ideation",
        description: "Crafting visual narratives through moodboards and concepts.",
    },
    ProcessStep {
        code: "FAB_CORE",
        title: "Fabrication",
        description: "High-precision engineering of assets and motion sequences.",
    },
    ProcessStep {
        code: "OPT_SYNC",
        title: "Calibration",
        description: "Frame-by-frame optimization for maximum performance.",
    },
    ProcessStep {
        code: "EXE_LIVE",
        title: "Deployment",
        description: "Executing final launch and scaling globally.",
    },
];

pub const ABOUT_INTRO: &str = "AG Creatorz is a premium digital engineering practice specialized in translating complex visions into high-conversion digital artifacts. We operate at the intersection of structure and creativity.";

pub const OPERATING_INTENT: [&str; 5] = [
    "Deliver professionally crafted digital solutions",
    "Maintain accuracy, consistency, and quality standards",
    "Communicate with clarity at every project stage",
    "Develop solutions aligned with practical business needs",
    "Support long-term digital growth for clients",
];

pub static PROFESSIONAL_STANDARDS: [Standard; 6] = [
    Standard {
        title: "Accuracy",
        description: "Work is executed with attention to structure and detail.",
    },
    Standard {
        title: "Accountability",
        description: "Each project is handled with responsibility and ownership.",
    },
    Standard {
        title: "Clarity in Process",
        description: "Workflows are transparent, structured, and predictable.",
    },
    Standard {
        title: "Sustainable Growth Focus",
        description: "Solutions are designed with longevity in mind.",
    },
    Standard {
        title: "Client Alignment",
        description: "Every decision supports client objectives.",
    },
    Standard {
        title: "Execution Excellence",
        description: "High standards guide every deliverable.",
    },
];

/// Project categories offered by the contact form
pub const CONTACT_CATEGORIES: [&str; 4] = [
    "Web Engineering",
    "Brand Identity",
    "Motion Post-Production",
    "Full Digital Package",
];

// ─────────────────────────────────────────────────────────────────────────────
// Lookups
// ─────────────────────────────────────────────────────────────────────────────

/// Find a service by id.
///
/// Stale or unknown ids yield `None`; callers render nothing in that case.
pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

/// Portfolio items matching a filter chip. `"All"` matches everything.
pub fn portfolio_in_category(category: &str) -> impl Iterator<Item = &'static PortfolioItem> + '_ {
    PORTFOLIO_ITEMS
        .iter()
        .filter(move |item| category == PORTFOLIO_CATEGORIES[0] || item.category == category)
}
