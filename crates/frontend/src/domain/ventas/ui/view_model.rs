use contracts::domain::venta::{CrearVentaRequest, Venta, VentasFiltro};
use contracts::domain::vendedor::Vendedor;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::ventas::api;
use crate::shared::message::MessageService;

/// Uncommitted input of the new-sale form. All fields are raw input
/// strings; coercion happens once, on submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NuevaVentaDraft {
    pub vendedor: String,
    pub fecha_venta: String,
    pub monto: String,
}

impl NuevaVentaDraft {
    /// Presence check plus numeric coercion. `None` means the draft is
    /// incomplete (or a field did not coerce) and no request may be sent.
    pub fn to_request(&self) -> Option<CrearVentaRequest> {
        if self.vendedor.trim().is_empty()
            || self.fecha_venta.trim().is_empty()
            || self.monto.trim().is_empty()
        {
            return None;
        }
        let vendedor = self.vendedor.trim().parse::<i64>().ok()?;
        let monto = self.monto.trim().parse::<f64>().ok()?;
        Some(CrearVentaRequest {
            vendedor,
            fecha_venta: self.fecha_venta.trim().to_string(),
            monto,
        })
    }
}

/// State and commands of the sales-management tab.
///
/// A struct of signals, cheap to copy into event handlers. Commands are
/// the only place state transitions happen.
#[derive(Clone, Copy)]
pub struct VentasViewModel {
    pub ventas: RwSignal<Vec<Venta>>,
    pub vendedores: RwSignal<Vec<Vendedor>>,
    pub draft: RwSignal<NuevaVentaDraft>,
    pub loading: RwSignal<bool>,
    messages: MessageService,
}

impl VentasViewModel {
    pub fn new(messages: MessageService) -> Self {
        Self {
            ventas: RwSignal::new(Vec::new()),
            vendedores: RwSignal::new(Vec::new()),
            draft: RwSignal::new(NuevaVentaDraft::default()),
            loading: RwSignal::new(false),
            messages,
        }
    }

    /// Both lists are fetched together; a failure of either leaves the
    /// previously shown lists untouched.
    async fn fetch_listas() -> Result<(Vec<Venta>, Vec<Vendedor>), String> {
        let ventas = api::get_ventas(&VentasFiltro::default()).await?;
        let vendedores = api::get_vendedores().await?;
        Ok((ventas, vendedores))
    }

    async fn reload_listas(&self) {
        match Self::fetch_listas().await {
            Ok((ventas, vendedores)) => {
                self.ventas.set(ventas);
                self.vendedores.set(vendedores);
            }
            Err(e) => {
                log::error!("Failed to load sales data: {}", e);
                self.messages.danger(format!("Error al cargar datos: {}", e));
            }
        }
    }

    /// Initial load of sales and salespeople.
    pub fn load_command(&self) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            vm.reload_listas().await;
            vm.loading.set(false);
        });
    }

    /// Submit the new-sale draft: warn on incomplete input, otherwise
    /// create, clear the draft, refetch the full lists.
    pub fn submit_command(&self) {
        let Some(req) = self.draft.get_untracked().to_request() else {
            self.messages.warning("Por favor completa todos los campos");
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::crear_venta(&req).await {
                Ok(_) => {
                    vm.draft.set(NuevaVentaDraft::default());
                    vm.reload_listas().await;
                    vm.messages.success("Venta creada exitosamente");
                }
                Err(e) => {
                    log::error!("Failed to create sale: {}", e);
                    vm.messages.danger(format!("Error al crear venta: {}", e));
                }
            }
            vm.loading.set(false);
        });
    }

    /// Delete a sale after interactive confirmation, then refetch.
    pub fn delete_command(&self, id: i64) {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("¿Estás seguro de eliminar esta venta?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::eliminar_venta(id).await {
                Ok(()) => {
                    vm.reload_listas().await;
                    vm.messages.success("Venta eliminada exitosamente");
                }
                Err(e) => {
                    log::error!("Failed to delete sale {}: {}", id, e);
                    vm.messages.danger(format!("Error al eliminar venta: {}", e));
                }
            }
            vm.loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> NuevaVentaDraft {
        NuevaVentaDraft {
            vendedor: "3".to_string(),
            fecha_venta: "2024-05-10".to_string(),
            monto: "150.00".to_string(),
        }
    }

    #[test]
    fn test_complete_draft_coerces() {
        let req = full_draft().to_request().unwrap();
        assert_eq!(
            req,
            CrearVentaRequest {
                vendedor: 3,
                fecha_venta: "2024-05-10".to_string(),
                monto: 150.0,
            }
        );
    }

    #[test]
    fn test_any_empty_field_rejects() {
        for field in ["vendedor", "fecha_venta", "monto"] {
            let mut draft = full_draft();
            match field {
                "vendedor" => draft.vendedor.clear(),
                "fecha_venta" => draft.fecha_venta.clear(),
                _ => draft.monto.clear(),
            }
            assert!(draft.to_request().is_none(), "{} empty must reject", field);
        }
        assert!(NuevaVentaDraft::default().to_request().is_none());
    }

    #[test]
    fn test_non_numeric_input_rejects() {
        let mut draft = full_draft();
        draft.monto = "abc".to_string();
        assert!(draft.to_request().is_none());

        let mut draft = full_draft();
        draft.vendedor = "3.5".to_string();
        assert!(draft.to_request().is_none());
    }
}
