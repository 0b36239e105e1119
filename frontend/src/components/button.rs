use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Without a handler the button submits its enclosing form, or lets the
    /// click bubble to its parent.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button class="button" onclick={props.onclick.clone()} disabled={props.disabled}>
            {for props.children.iter()}
        </button>
    }
}
