use dioxus::prelude::*;

/// A styled text input.
///
/// Pair it with [`crate::Label`] for captions; extra attributes (`id`,
/// `autocomplete`, …) pass straight through to the underlying element.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn input_renders_type_and_placeholder() {
        fn app() -> Element {
            rsx! {
                Input { input_type: "email", placeholder: "user@example.com" }
            }
        }

        let html = render(app);
        assert!(html.contains("email"));
        assert!(html.contains("user@example.com"));
    }

    #[test]
    fn disabled_input_carries_the_attribute() {
        fn app() -> Element {
            rsx! {
                Input { disabled: true }
            }
        }

        let html = render(app);
        assert!(html.contains("disabled"));
    }
}
