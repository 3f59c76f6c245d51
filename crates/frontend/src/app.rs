use leptos::prelude::*;
use thaw::*;

use crate::domain::comisiones::ui::{ComisionesPage, ComisionesViewModel};
use crate::domain::ventas::ui::{VentasPage, VentasViewModel};
use crate::shared::message::MessageService;

/// The two mutually exclusive views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Ventas,
    Comisiones,
}

/// Root component. Owns the tab selection and both view-models, so
/// switching tabs never drops the other tab's state.
#[component]
pub fn App() -> impl IntoView {
    let messages = MessageService::new();
    let active_tab = RwSignal::new(Tab::Ventas);
    let ventas_vm = VentasViewModel::new(messages);
    let comisiones_vm = ComisionesViewModel::new(messages);

    // Initial data load. The commission date filter already defaults to
    // the current month inside its view-model.
    ventas_vm.load_command();

    let tab_appearance = move |tab: Tab| {
        move || {
            if active_tab.get() == tab {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            }
        }
    };

    view! {
        <div style="max-width: 1100px; margin: 0 auto; padding: 16px;">
            <header style="margin-bottom: 16px;">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h1 style="margin: 0; font-size: 1.5rem; font-weight: 600;">
                        "Sistema de Comisiones"
                    </h1>
                    <Space>
                        <Button
                            appearance=tab_appearance(Tab::Ventas)
                            on_click=move |_| active_tab.set(Tab::Ventas)
                        >
                            "Gestión de Ventas"
                        </Button>
                        <Button
                            appearance=tab_appearance(Tab::Comisiones)
                            on_click=move |_| active_tab.set(Tab::Comisiones)
                        >
                            "Cálculo de Comisiones"
                        </Button>
                    </Space>
                </Flex>
            </header>

            <MessageBanner messages=messages />

            {move || match active_tab.get() {
                Tab::Ventas => view! { <VentasPage vm=ventas_vm /> }.into_any(),
                Tab::Comisiones => view! { <ComisionesPage vm=comisiones_vm /> }.into_any(),
            }}
        </div>
    }
}

/// Renders the current transient message, if any.
#[component]
fn MessageBanner(messages: MessageService) -> impl IntoView {
    view! {
        <div>
            {move || messages.get().map(|(kind, text)| {
                let (bg, border, fg) = kind.colors();
                let style = format!(
                    "padding: 12px; margin-bottom: 16px; border-radius: 8px; \
                     background: {}; border: 1px solid {}; color: {};",
                    bg, border, fg
                );
                view! { <div style=style>{text}</div> }
            })}
        </div>
    }
}
