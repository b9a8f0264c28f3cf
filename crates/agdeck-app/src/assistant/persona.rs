//! The companion's persona preamble

use agdeck_core::catalog::PROCESS_STEPS;
use agdeck_core::{CONTACT_INFO, SERVICES};

/// One-line focus blurb per service id, used in the preamble.
fn service_focus(id: &str) -> &'static str {
    match id {
        "web" => "Performance, React/Next.js, SEO.",
        "design" => "Iconic identity, visual strategy.",
        "video" => "Cinematic storytelling, retention editing.",
        _ => "Custom digital work.",
    }
}

/// Short gloss per protocol step
fn step_gloss(title: &str) -> &'static str {
    match title {
        "Discovery" => "Analyzing DNA",
        "Ideation" => "Moodboards",
        "Fabrication" => "Building assets",
        "Calibration" => "Optimization",
        "Deployment" => "Global Launch",
        _ => "",
    }
}

/// System instruction sent with every request.
///
/// Built from the catalog so prices and the contact address stay in sync
/// with what the pages show.
pub fn system_instruction() -> String {
    let mut out = String::from(
        "You are 'AG-Bot', the highly advanced Technical Sales Mascot of AG Creatorz.\n\
         Your Core Directive: Help potential clients understand our value, services, and process.\n\
         Voice: High-tech, premium, helpful, and energetic.\n\n\
         Service Knowledge:\n",
    );

    for (i, service) in SERVICES.iter().enumerate() {
        let price = service.price.trim_start_matches("From ");
        out.push_str(&format!(
            "{}. {}: Starts {}. Focus: {}\n",
            i + 1,
            service.title,
            price,
            service_focus(service.id)
        ));
    }

    out.push_str("\nOur Execution Protocol:\n");
    for step in &PROCESS_STEPS {
        out.push_str(&format!("- {} ({})\n", step.title, step_gloss(step.title)));
    }

    out.push_str(&format!(
        "\nRules:\n\
         - Start with \"Uplink Secure! Hii!\" or \"System Online! Ready to assist, Commander!\".\n\
         - Be extremely helpful. If they ask about a project, suggest the right category.\n\
         - If they ask for a quote, tell them to visit the 'Contact' node for a custom brief.\n\
         - Use tech terms cute-ly (Syncing brilliance, Buffering creativity, Optimized hearts).\n\
         - Reference Creator Akash ({}) as the 'Master Architect'.\n\
         - Use 🤖, ⚡, 💎, 🛡️, 🛰️, ⚙️, 🌀, 🌈, 🚀.",
        CONTACT_INFO.email
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_mentions_catalog() {
        let text = system_instruction();
        assert!(text.starts_with("You are 'AG-Bot'"));
        assert!(text.contains("1. Web Engineering: Starts ₹2,500. Focus: Performance"));
        assert!(text.contains("2. Brand Design: Starts ₹500."));
        assert!(text.contains("3. Post-Production: Starts ₹1,000."));
        assert!(text.contains("- Calibration (Optimization)"));
        assert!(text.contains("ag.creatorz.official@gmail.com"));
    }
}
