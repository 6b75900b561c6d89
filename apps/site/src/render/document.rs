//! Resume renderer — projects a `ResumeDocument` into the page's visual tree.
//!
//! Layout:
//! - action bar (print, hidden when printing)
//! - sidebar: initials, contact, skills, education, additional info, share
//! - main column: name + tagline header, summary, projects, objective
//!
//! Rendering is pure. The print and copy actions appear only as
//! `data-action` bindings for the host to wire up; nothing is invoked here.

use crate::actions::qr::{produce_shareable_code, QrRenderer};
use crate::actions::share_link::ShareState;
use crate::models::{AdditionalInfo, ContactInfo, Education, Project, ResumeDocument, Skill};
use crate::render::contact::contact_links;
use crate::render::node::{el, Element, Node};

pub const PRINT_BUTTON_TEXT: &str = "Download PDF";

/// Splits `name` on whitespace and joins the first character of each word.
///
/// An empty or whitespace-only name yields an empty string.
pub fn derive_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

pub fn render_document(doc: &ResumeDocument, share: &ShareState, qr: &dyn QrRenderer) -> Node {
    let sidebar = el("aside")
        .class("sidebar")
        .child(render_avatar(&doc.name))
        .child(render_contact(&doc.contact))
        .child(render_skills(&doc.skills))
        .child(render_education(&doc.education))
        .child(render_additional_info(&doc.additional_info))
        .child(render_share(share, qr));

    let main_column = el("div")
        .class("main-column")
        .child(render_header(doc))
        .child(section("summary", "Professional Summary").child(el("p").text(&doc.summary)))
        .child(render_projects(&doc.projects))
        .child(
            section("objective", "Career Objective")
                .child(el("p").class("objective").text(&doc.objective)),
        );

    el("div")
        .class("page")
        .child(render_action_bar())
        .child(el("main").class("resume").child(sidebar).child(main_column))
        .into()
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

fn section(key: &str, title: &str) -> Element {
    el("section")
        .attr("data-section", key)
        .child(el("h2").class("section-title").text(title))
}

/// Anchor opening in a new tab without leaking the opener.
fn external_link(href: &str) -> Element {
    el("a")
        .attr("href", href)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
}

fn render_action_bar() -> Element {
    el("div").class("action-bar no-print").child(
        el("button")
            .attr("type", "button")
            .class("action-button")
            .attr("data-action", "print")
            .attr("aria-label", "Download as PDF")
            .text(PRINT_BUTTON_TEXT),
    )
}

fn render_avatar(name: &str) -> Element {
    el("div")
        .class("avatar")
        .child(el("span").class("initials").text(derive_initials(name)))
}

fn render_header(doc: &ResumeDocument) -> Element {
    el("header")
        .class("identity")
        .child(el("h1").text(&doc.name))
        .child(el("p").class("tagline").text(&doc.tagline))
}

fn render_contact(contact: &ContactInfo) -> Element {
    let items = contact_links(contact).into_iter().map(|link| -> Node {
        external_link(&link.href)
            .class("contact-item")
            .attr("data-contact", link.kind.as_str())
            .child(el("span").text(link.text))
            .into()
    });
    section("contact", "Contact").child(el("div").class("contact-list").children(items))
}

fn render_skills(skills: &[Skill]) -> Element {
    let items = skills.iter().map(|skill| -> Node {
        el("div")
            .class("skill")
            .attr("data-key", &skill.category)
            .child(el("h3").text(&skill.category))
            .child(el("p").text(&skill.items))
            .into()
    });
    section("skills", "Technical Skills").children(items)
}

fn render_education(education: &[Education]) -> Element {
    let items = education.iter().map(|edu| -> Node {
        let degree = match &edu.link {
            Some(href) => el("p")
                .class("degree")
                .child(external_link(href).text(&edu.degree)),
            None => el("p").class("degree").text(&edu.degree),
        };
        el("div")
            .class("education")
            .attr("data-key", &edu.degree)
            .child(degree)
            .child(el("p").class("period").text(&edu.period))
            .into()
    });
    section("education", "Education").children(items)
}

fn labelled_line(label: &str) -> Element {
    el("p").child(el("span").class("label").text(label))
}

fn render_additional_info(info: &AdditionalInfo) -> Element {
    let mut lines = vec![labelled_line("Interests:")
        .attr("data-line", "interests")
        .text(format!(" {}", info.interests))];
    if let Some(portfolio) = &info.portfolio {
        lines.push(
            labelled_line("Portfolio:")
                .attr("data-line", "portfolio")
                .text(" ")
                .child(el("a").attr("href", &portfolio.url).text(&portfolio.text)),
        );
    }
    lines.push(
        labelled_line("Availability:")
            .attr("data-line", "availability")
            .text(format!(" {}", info.availability)),
    );
    section("additional", "Additional Information")
        .children(lines.into_iter().map(Node::from))
}

fn render_share(share: &ShareState, qr: &dyn QrRenderer) -> Element {
    let address = share.current_address.as_deref();
    let mut button = el("button")
        .attr("type", "button")
        .class("action-button copy-link no-print")
        .attr("data-action", "copy-link");
    // Copy and QR must carry the same value.
    if let Some(addr) = address.filter(|a| !a.trim().is_empty()) {
        button = button.attr("data-address", addr);
    }
    let mut block = section("share", "Share").child(button.text(share.label.text()));
    if let Some(code) = produce_shareable_code(address, qr) {
        block = block.child(el("div").class("qr").child(code));
    }
    block
}

fn render_projects(projects: &[Project]) -> Element {
    section("projects", "Project Experience").children(projects.iter().map(render_project))
}

fn render_project(project: &Project) -> Node {
    let mut title = el("h3").text(&project.title);
    if let Some(subtitle) = &project.subtitle {
        title = title.child(el("span").class("subtitle").text(format!(" — {subtitle}")));
    }
    let details = project
        .details
        .iter()
        .map(|detail| Node::from(el("li").text(detail)));

    el("div")
        .class("project")
        .attr("data-key", &project.title)
        .child(title)
        .child(
            external_link(&project.link.url)
                .class("project-link")
                .text(format!("🔗 {}", project.link.text)),
        )
        .child(el("ul").class("details").children(details))
        .into()
}
