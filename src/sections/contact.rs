use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{icon, Icon};
use crate::components::section_title::SectionTitle;
use crate::config;
use crate::copy::{ContactCopy, Lang};

/// What the visitor typed into the quick-message form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl ContactMessage {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.contact, &self.message]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub lang: Lang,
    pub contact: &'static ContactCopy,
    /// Whoever actually delivers the message. Nothing is sent by default.
    #[prop_or_default]
    pub on_submit: Callback<ContactMessage>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let ContactProps { lang, contact, on_submit } = props;
    let name_ref = use_node_ref();
    let contact_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let on_submit = on_submit.clone();
        let (name_ref, contact_ref, message_ref) =
            (name_ref.clone(), contact_ref.clone(), message_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input_value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            on_submit.emit(ContactMessage {
                name: input_value(&name_ref),
                contact: input_value(&contact_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
            });
        })
    };

    html! {
        <section id={config::ANCHOR_CONTACT} class="container contact-section">
            <SectionTitle kicker={contact.kicker} title={contact.title} subtitle={contact.subtitle} />
            <div class="contact-grid">
                <div class="card">
                    <h3 class="card-title">{ lang.quick_message_title() }</h3>
                    <form class="contact-form" {onsubmit}>
                        <input ref={name_ref} class="field" type="text" placeholder={contact.form_name} />
                        <input ref={contact_ref} class="field" type="text" placeholder={contact.form_email} />
                        <textarea ref={message_ref} class="field field-message" placeholder={contact.form_message} />
                        <button class="button button-full" type="submit">{ contact.form_send }</button>
                    </form>
                </div>

                <div class="contact-links">
                    <a href={format!("mailto:{}", contact.email)} class="contact-link">
                        { icon(Icon::Mail, "icon-sm") }
                        { contact.email }
                    </a>
                    <a href={contact.maps_url} target="_blank" rel="noreferrer" class="contact-link">
                        { icon(Icon::MapPin, "icon-sm") }
                        { contact.city }
                    </a>
                    <a href={contact.site} target="_blank" rel="noreferrer" class="contact-link">
                        { icon(Icon::Globe, "icon-sm") }
                        { contact.site }
                    </a>
                    <div class="card contact-tip">
                        <p>{ contact.map_tip }</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
