//! "Acme Corp" five-page corporate website.

use super::{footer, hero, navbar, BORDER, INDIGO, LIGHT, LIGHT_INDIGO, NAVY, SLATE, WHITE};
use crate::mockup::element::{band, button, image, input, rect, text, ElementDescriptor, Styled};
use crate::orchestrator::PageSpec;

/// Pages in export order
pub fn pages() -> Vec<PageSpec> {
    vec![
        PageSpec::new(1, "Home", home),
        PageSpec::new(2, "About", about),
        PageSpec::new(3, "Services", services),
        PageSpec::new(4, "Portfolio", portfolio),
        PageSpec::new(5, "Contact", contact),
    ]
}

pub fn home() -> Vec<ElementDescriptor> {
    let mut els = navbar("Home");
    els.extend([
        band(0, 60, 1440, 340, INDIGO),
        text(200, 124, 1040, 72, "Build Better Products Faster")
            .color(WHITE)
            .size(52)
            .bold()
            .align("center"),
        text(
            320,
            208,
            800,
            56,
            "We help businesses transform their digital presence with cutting-edge solutions.",
        )
        .color("#C7D2FE")
        .size(18)
        .align("center"),
        button(556, 290, 168, 48, "Start Free Trial", "ghost", "lg"),
        button(736, 290, 152, 48, "Learn More", "outline", "lg"),
    ]);

    let cards = [
        (48, "Lightning Fast", "Deploy your apps in minutes, not hours. Infrastructure scales automatically."),
        (512, "Enterprise Security", "Bank-grade encryption and SOC2 compliance keeps your data safe 24/7."),
        (976, "Advanced Analytics", "Real-time dashboards give you actionable insights to grow the business."),
    ];
    let y = 424;
    for (x, title, desc) in cards {
        els.extend([
            rect(x, y, 416, 200, LIGHT, BORDER).radius(10),
            text(x + 24, y + 20, 368, 28, title).color(NAVY).size(18).bold(),
            text(x + 24, y + 56, 368, 80, desc).color(SLATE).size(14),
            text(x + 24, y + 152, 140, 24, "Learn more →").color(INDIGO).size(14),
        ]);
    }

    els.push(band(0, 652, 1440, 152, LIGHT_INDIGO));
    let stats = [
        ("500+", "Clients", 176),
        ("99.9%", "Uptime SLA", 512),
        ("10x", "Faster Deploy", 848),
        ("24/7", "Expert Support", 1152),
    ];
    for (value, label, x) in stats {
        els.extend([
            text(x, 676, 176, 52, value).color(INDIGO).size(36).bold().align("center"),
            text(x, 732, 176, 24, label).color(SLATE).size(14).align("center"),
        ]);
    }

    els.extend(footer());
    els
}

pub fn about() -> Vec<ElementDescriptor> {
    let mut els = navbar("About");
    els.extend(hero(
        "Our Story",
        "Founded in 2015, Acme Corp has been helping businesses succeed in the digital age.",
        60,
        220,
        "#312E81",
    ));
    els.extend([
        band(0, 280, 1440, 264, WHITE),
        image(48, 296, 520, 224),
        text(608, 296, 784, 36, "Who We Are").color(NAVY).size(26).bold(),
        text(
            608,
            344,
            784,
            72,
            "Acme Corp was founded with a simple mission: make enterprise-grade technology \
             accessible to businesses of all sizes. Today we serve 500+ clients in 40 countries.",
        )
        .color(SLATE)
        .size(15),
        text(
            608,
            428,
            784,
            64,
            "Our team of 120+ engineers and designers work to build products that matter. \
             We believe in open collaboration, continuous learning, and customer obsession.",
        )
        .color(SLATE)
        .size(15),
    ]);

    els.push(text(0, 560, 1440, 40, "Meet the Team").color(NAVY).size(26).bold().align("center"));
    let team = [
        ("Sarah Chen", "CEO & Co-Founder", 144),
        ("Marcus Williams", "CTO & Co-Founder", 448),
        ("Priya Patel", "Head of Design", 752),
        ("James Rodriguez", "VP Engineering", 1056),
    ];
    for (name, role, x) in team {
        els.extend([
            band(x, 616, 192, 8, "#C7D2FE").radius(4),
            image(x, 624, 192, 148),
            text(x, 780, 192, 24, name).color(NAVY).size(15).bold().align("center"),
            text(x, 808, 192, 20, role).color(SLATE).size(13).align("center"),
        ]);
    }

    els.extend(footer());
    els
}

pub fn services() -> Vec<ElementDescriptor> {
    let mut els = navbar("Services");
    els.extend(hero(
        "Our Services",
        "End-to-end solutions tailored to accelerate your digital transformation.",
        60,
        220,
        "#065F46",
    ));

    let offerings = [
        (
            48,
            "Cloud Infrastructure",
            "From $299/mo",
            "Scalable, resilient cloud architecture on AWS, GCP, or Azure. 99.9% uptime SLA.",
            ["Multi-cloud support", "Auto-scaling", "24/7 monitoring", "DDoS protection"],
        ),
        (
            496,
            "Product Development",
            "From $4,999/mo",
            "Full-cycle development from idea to launch. Agile teams deliver on time and budget.",
            ["Agile sprints", "UI/UX design", "QA & testing", "Post-launch support"],
        ),
        (
            944,
            "Data & Analytics",
            "From $1,499/mo",
            "Transform raw data into actionable insights. Real-time dashboards and ML at scale.",
            ["Real-time dashboards", "ML & AI models", "Data pipelines", "Custom reports"],
        ),
    ];
    for (x, title, price, desc, features) in offerings {
        els.extend([
            rect(x, 296, 400, 368, WHITE, BORDER).radius(10),
            text(x + 24, 316, 352, 32, title).color(NAVY).size(20).bold(),
            text(x + 24, 352, 200, 28, price).color("#059669").size(17).bold(),
            text(x + 24, 388, 352, 72, desc).color(SLATE).size(14),
        ]);
        for (i, feature) in features.iter().enumerate() {
            let y = 472 + i as u32 * 28;
            els.push(text(x + 24, y, 352, 24, &format!("✓  {}", feature)).color("#059669").size(14));
        }
        els.push(button(x + 24, 620, 352, 40, "Get Started", "secondary", "md"));
    }

    els.extend([
        band(0, 688, 1440, 136, "#ECFDF5"),
        text(200, 708, 1040, 40, "Not sure which plan fits you?")
            .color("#065F46")
            .size(26)
            .bold()
            .align("center"),
        text(
            320,
            756,
            800,
            28,
            "Talk to our experts: free 30-minute consultation, no strings attached.",
        )
        .color("#047857")
        .size(16)
        .align("center"),
        button(600, 790, 240, 40, "Book a Free Call", "secondary", "md"),
    ]);

    els.extend(footer());
    els
}

pub fn portfolio() -> Vec<ElementDescriptor> {
    let mut els = navbar("Portfolio");
    els.extend(hero(
        "Our Work",
        "A selection of projects we are proud of, from startups to Fortune 500 companies.",
        60,
        220,
        "#7C3AED",
    ));

    let projects = [
        ("FinTech Dashboard", "Data Analytics", 48, 296),
        ("HealthCare Portal", "Product Dev", 512, 296),
        ("E-Commerce Platform", "Cloud + Dev", 976, 296),
        ("Logistics Tracker", "Mobile App", 48, 560),
        ("EdTech LMS", "Product Dev", 512, 560),
        ("AI Analytics Suite", "Data + AI", 976, 560),
    ];
    for (title, category, x, y) in projects {
        els.extend([
            rect(x, y, 416, 240, LIGHT, BORDER).radius(10),
            image(x + 16, y + 16, 384, 152),
            text(x + 16, y + 176, 260, 24, title).color(NAVY).size(15).bold(),
            text(x + 296, y + 180, 104, 18, category).color("#7C3AED").size(12).align("right"),
            text(x + 16, y + 208, 160, 20, "View Case Study →").color(INDIGO).size(13),
        ]);
    }

    els.extend(footer());
    els
}

pub fn contact() -> Vec<ElementDescriptor> {
    let mut els = navbar("Contact");
    els.extend(hero(
        "Get In Touch",
        "Have a project in mind? We would love to hear from you.",
        60,
        196,
        "#BE185D",
    ));

    els.extend([
        rect(80, 272, 672, 536, WHITE, BORDER).radius(12),
        text(112, 296, 608, 32, "Send Us a Message").color(NAVY).size(21).bold(),
        input(112, 344, 608, 48, "John Doe", Some("Full Name")),
        input(112, 432, 608, 48, "john@example.com", Some("Email Address")),
        input(112, 520, 608, 48, "How can we help?", Some("Subject")),
        text(112, 600, 200, 20, "Message").color("#374151").size(14).bold(),
        rect(112, 624, 608, 128, "#F9FAFB", "#D1D5DB").radius(6),
        text(124, 636, 584, 104, "Tell us about your project, goals, and timeline...")
            .color("#9CA3AF")
            .size(14),
        button(112, 764, 608, 44, "Send Message", "primary", "lg"),
    ]);

    els.extend([
        image(800, 272, 560, 332),
        rect(800, 616, 560, 192, WHITE, BORDER).radius(12),
        text(824, 636, 512, 24, "Contact Information").color(NAVY).size(17).bold(),
    ]);
    let details = [
        "hello@acmecorp.com",
        "+1 (415) 555-0192",
        "123 Innovation Drive, San Francisco, CA 94105",
        "Mon-Fri, 9 AM to 6 PM PST",
        "Response time: within 1 business day",
    ];
    for (i, line) in details.iter().enumerate() {
        let y = 668 + i as u32 * 28;
        els.push(text(824, y, 512, 20, line).color(SLATE).size(14));
    }

    els.extend(footer());
    els
}
