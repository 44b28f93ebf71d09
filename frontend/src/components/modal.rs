//! Modal dialog shell used by the editor and the delete confirmation.

use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    #[prop_or_default]
    pub children: Html,
    #[prop_or_default]
    pub actions: Html,
    /// Fired on backdrop clicks. Omit to make the dialog non-dismissable.
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
    #[prop_or_else(|| "modal-sm".to_string())]
    pub size: String,
}

pub struct Modal {
    title_id: String,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = props.on_dismiss.clone().map(|dismiss| {
            Callback::from(move |_: MouseEvent| dismiss.emit(()))
        });

        html! {
            <div class="modal-backdrop" onclick={on_backdrop}>
                <div
                    class={format!("modal {}", props.size)}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={self.title_id.clone()}
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                >
                    <h2 class="modal-title" id={self.title_id.clone()}>{ &props.title }</h2>
                    <div class="modal-content">
                        { props.children.clone() }
                    </div>
                    <div class="modal-actions">
                        { props.actions.clone() }
                    </div>
                </div>
            </div>
        }
    }
}
