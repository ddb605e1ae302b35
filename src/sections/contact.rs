//! Contact section - the form, contact methods, and social links

use crate::content::model::{ContactInfo, PersonalInfo, SocialLink};
use crate::form::{self, Phase};
use crate::html::{el, Element, Node};
use crate::warn::WarningSink;

use super::{external_link, icon, section_header};

pub fn render(
    personal: &PersonalInfo,
    social_links: &[SocialLink],
    contact: &ContactInfo,
    phase: Phase,
    endpoint: &str,
    warnings: &mut WarningSink,
) -> Node {
    el("section")
        .id("contact")
        .class("contact")
        .child(section_header(
            "Get In Touch",
            "Ready to start a project or have a question? I'd love to hear from you. Let's \
             create something amazing together!",
        ))
        .child(
            el("div")
                .class("contact-grid")
                .child(form_panel(phase, endpoint, warnings))
                .child(info_panel(personal, social_links, contact, warnings)),
        )
        .child(cta(personal, warnings))
        .into()
}

fn form_panel(phase: Phase, endpoint: &str, warnings: &mut WarningSink) -> Element {
    let submitting = phase == Phase::Submitting;

    let submit_label: Element = if submitting {
        el("span")
            .child_opt(icon("loader", 20, "icon icon-spin", warnings))
            .text("Sending...")
    } else {
        el("span")
            .child_opt(icon("send", 20, "icon", warnings))
            .text("Send Message")
    };

    let mut panel_form = el("form")
        .class("contact-form")
        .attr("name", form::FORM_NAME)
        .attr("method", "POST")
        .attr("action", endpoint)
        .attr("data-form-endpoint", endpoint)
        .child(
            el("input")
                .attr("type", "hidden")
                .attr("name", "form-name")
                .attr("value", form::FORM_NAME),
        )
        .child(
            // Honeypot; hidden from humans, interesting to bots.
            el("div")
                .class("hp-field")
                .attr("aria-hidden", "true")
                .child(
                    el("label")
                        .text("Don't fill this out if you're human: ")
                        .child(el("input").attr("name", form::HONEYPOT_FIELD)),
                ),
        )
        .child(field("name", "Full Name *", "Your full name", "text", form::MIN_NAME))
        .child(field(
            "email",
            "Email Address *",
            "your.email@example.com",
            "email",
            0,
        ))
        .child(field("subject", "Subject *", "What's this about?", "text", form::MIN_SUBJECT))
        .child(textarea_field(
            "message",
            "Message *",
            "Tell me about your project or question...",
            form::MIN_MESSAGE,
        ))
        .child(
            el("button")
                .attr("type", "submit")
                .class(if submitting { "btn-submit btn-disabled" } else { "btn-submit" })
                .attr_opt("disabled", submitting.then_some("disabled"))
                .child(submit_label),
        );

    match phase {
        Phase::Success => {
            panel_form = panel_form.child(
                el("div")
                    .class("form-banner banner-success")
                    .child_opt(icon("check-circle", 20, "icon", warnings))
                    .child(el("p").text("Message sent successfully! I'll get back to you soon.")),
            );
        }
        Phase::Error => {
            panel_form = panel_form.child(
                el("div")
                    .class("form-banner banner-error")
                    .child_opt(icon("x-circle", 20, "icon", warnings))
                    .child(el("p").text(
                        "Failed to send message. Please try again or use email directly.",
                    )),
            );
        }
        Phase::Idle | Phase::Submitting => {}
    }

    el("div")
        .class("form-panel")
        .child(el("h3").text("Send a Message"))
        .child(panel_form)
}

fn field(name: &'static str, label: &str, placeholder: &str, kind: &str, min: usize) -> Element {
    let mut input = el("input")
        .attr("type", kind.to_string())
        .id(name)
        .attr("name", name)
        .attr("placeholder", placeholder);
    if min > 0 {
        input = input.attr("minlength", min.to_string());
    }
    el("div")
        .class("form-field")
        .child(el("label").attr("for", name).text(label))
        .child(input)
        .child(el("p").class("field-error").attr("data-error-for", name))
}

fn textarea_field(name: &'static str, label: &str, placeholder: &str, min: usize) -> Element {
    el("div")
        .class("form-field")
        .child(el("label").attr("for", name).text(label))
        .child(
            el("textarea")
                .id(name)
                .attr("name", name)
                .attr("rows", "5")
                .attr("minlength", min.to_string())
                .attr("placeholder", placeholder),
        )
        .child(el("p").class("field-error").attr("data-error-for", name))
}

fn info_panel(
    personal: &PersonalInfo,
    social_links: &[SocialLink],
    contact: &ContactInfo,
    warnings: &mut WarningSink,
) -> Element {
    let mut methods = el("div")
        .class("contact-methods")
        .child(method(
            "mail",
            "Email",
            &personal.email,
            Some(format!("mailto:{}", personal.email)),
            "Send me an email anytime",
            warnings,
        ));
    if let Some(phone) = &personal.phone {
        methods = methods.child(method(
            "phone",
            "Phone",
            phone,
            Some(format!("tel:{phone}")),
            "Available during business hours",
            warnings,
        ));
    }
    methods = methods
        .child(method(
            "map-pin",
            "Location",
            &personal.location,
            None,
            "Based in",
            warnings,
        ))
        .child(method(
            "clock",
            "Availability",
            &contact.availability,
            None,
            "Current status",
            warnings,
        ));

    let mut socials = el("div").class("social-row");
    for link in social_links {
        socials = socials.child(
            external_link(&link.url)
                .class("social-button")
                .attr("aria-label", format!("Visit {}", link.name))
                .child_opt(icon(&link.icon, 20, "icon", warnings)),
        );
    }

    let preferred = if contact.preferred_contact_method == "Email" {
        "I prefer email for initial contact as it allows me to provide detailed responses \
         and reference our conversation later."
            .to_string()
    } else {
        format!(
            "My preferred contact method is {}.",
            contact.preferred_contact_method
        )
    };

    el("div")
        .class("info-panel")
        .child(el("h3").text("Contact Information"))
        .child(methods)
        .child(
            el("div")
                .class("connect")
                .child(el("h4").text("Connect With Me"))
                .child(socials)
                .child(
                    el("p")
                        .class("blurb")
                        .text("Follow me for updates on projects, tech insights, and more!"),
                ),
        )
        .child(
            el("div")
                .class("note-panel note-response")
                .child_opt(icon("clock", 20, "icon", warnings))
                .child(
                    el("div")
                        .child(el("h4").text("Quick Response"))
                        .child(el("p").text(
                            "I typically respond to emails within 24 hours. For urgent matters, \
                             feel free to call or connect via LinkedIn for faster response.",
                        )),
                ),
        )
        .child(
            el("div")
                .class("note-panel note-preferred")
                .child_opt(icon("star", 20, "icon", warnings))
                .child(
                    el("div")
                        .child(el("h4").text("Preferred Contact"))
                        .child(el("p").text(preferred)),
                ),
        )
}

fn method(
    icon_name: &str,
    title: &str,
    value: &str,
    link: Option<String>,
    blurb: &str,
    warnings: &mut WarningSink,
) -> Element {
    let value_node: Node = match link {
        Some(href) => {
            let anchor = if href.starts_with("http") {
                external_link(&href)
            } else {
                el("a").attr("href", href)
            };
            anchor.class("method-value").text(value).into()
        }
        None => el("span").class("method-value").text(value).into(),
    };

    el("div")
        .class("contact-method")
        .child(
            el("div")
                .class("method-icon")
                .child_opt(icon(icon_name, 20, "icon", warnings)),
        )
        .child(
            el("div")
                .child(el("h4").text(title))
                .child(el("p").class("blurb").text(blurb))
                .child(value_node),
        )
}

fn cta(personal: &PersonalInfo, warnings: &mut WarningSink) -> Element {
    el("div")
        .class("cta-panel cta-dark")
        .child(el("h3").text("Let's Build Something Great Together"))
        .child(el("p").text(
            "Whether you have a project in mind, need consulting, or just want to chat about \
             technology, I'm always open to new opportunities and interesting conversations.",
        ))
        .child(
            el("div")
                .class("cta-actions")
                .child(
                    el("a")
                        .attr(
                            "href",
                            format!("mailto:{}?subject=Project Inquiry", personal.email),
                        )
                        .class("btn-primary")
                        .child_opt(icon("mail", 18, "icon", warnings))
                        .text("Send Email Directly"),
                )
                .child(
                    el("button")
                        .class("btn-dark")
                        .attr("data-resume-action", "print")
                        .child_opt(icon("download", 18, "icon", warnings))
                        .text("Download Resume"),
                ),
        )
}
