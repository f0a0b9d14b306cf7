//! Contact section: the form and the collective's details.
//!
//! The form has no endpoint. `site.js` prevents submission and logs the
//! captured fields to the console.

use super::Context;
use maud::{Markup, html};

/// `tel:` link target: the digits of `phone`, keeping a leading `+`.
pub(crate) fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect();
    format!("tel:{digits}")
}

pub(crate) fn contact_section(ctx: &Context) -> Markup {
    let contact = &ctx.site.config.contact;
    html! {
        section.contact id="contact" {
            h2.section-title { "Get in Touch" }
            div.contact-grid {
                form.contact-form data-contact-form {
                    div.form-row {
                        label for="contact-name" { "Name" }
                        input id="contact-name" type="text" name="name" required;
                    }
                    div.form-row {
                        label for="contact-email" { "Email" }
                        input id="contact-email" type="email" name="email" required;
                    }
                    div.form-row {
                        label for="contact-subject" { "Subject" }
                        input id="contact-subject" type="text" name="subject" required;
                    }
                    div.form-row {
                        label for="contact-message" { "Message" }
                        textarea id="contact-message" name="message" rows="5" required {}
                    }
                    button.button type="submit" { "Send Message" }
                }
                div.contact-info {
                    @if !contact.email.is_empty() {
                        div.contact-item {
                            h3 { "Email" }
                            a href={ "mailto:" (contact.email) } { (contact.email) }
                        }
                    }
                    @if !contact.phone.is_empty() {
                        div.contact-item {
                            h3 { "Phone" }
                            a href=(tel_href(&contact.phone)) { (contact.phone) }
                        }
                    }
                    @if !contact.address.is_empty() {
                        div.contact-item {
                            h3 { "Address" }
                            address {
                                @for (i, line) in contact.address.iter().enumerate() {
                                    @if i > 0 { br; }
                                    (line)
                                }
                            }
                        }
                    }
                    @if let Some(map) = &contact.map_embed {
                        iframe.contact-map src=(map) title="Map" loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade" {}
                    }
                }
            }
        }
    }
}
