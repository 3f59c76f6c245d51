use std::collections::HashSet;

use contracts::domain::comisiones::ComisionesReport;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::comisiones::api;
use crate::shared::date_utils::current_month_range;
use crate::shared::message::MessageService;

/// State and commands of the commission-calculation tab.
#[derive(Clone, Copy)]
pub struct ComisionesViewModel {
    pub fecha_inicio: RwSignal<String>,
    pub fecha_fin: RwSignal<String>,
    pub report: RwSignal<Option<ComisionesReport>>,
    /// Salesperson ids whose detail panel is open.
    pub expanded: RwSignal<HashSet<i64>>,
    pub loading: RwSignal<bool>,
    messages: MessageService,
}

impl ComisionesViewModel {
    /// The date-range filter starts at the current calendar month.
    pub fn new(messages: MessageService) -> Self {
        let (inicio, fin) = current_month_range();
        Self {
            fecha_inicio: RwSignal::new(inicio),
            fecha_fin: RwSignal::new(fin),
            report: RwSignal::new(None),
            expanded: RwSignal::new(HashSet::new()),
            loading: RwSignal::new(false),
            messages,
        }
    }

    /// Compute commissions for the selected range. Replaces the report
    /// wholesale and collapses every open detail panel.
    pub fn calcular_command(&self) {
        let inicio = self.fecha_inicio.get_untracked();
        let fin = self.fecha_fin.get_untracked();
        if inicio.trim().is_empty() || fin.trim().is_empty() {
            self.messages
                .warning("Por favor selecciona un rango de fechas");
            return;
        }

        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::calcular_comisiones(&inicio, &fin).await {
                Ok(report) => {
                    vm.report.set(Some(report));
                    vm.expanded.set(HashSet::new());
                    vm.messages.success("Comisiones calculadas exitosamente");
                }
                Err(e) => {
                    log::error!("Failed to compute commissions: {}", e);
                    vm.messages
                        .danger(format!("Error al calcular comisiones: {}", e));
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn toggle_expanded(&self, vendedor_id: i64) {
        self.expanded.update(|set| toggle(set, vendedor_id));
    }

    pub fn is_expanded(&self, vendedor_id: i64) -> bool {
        self.expanded.with(|set| set.contains(&vendedor_id))
    }
}

fn toggle(set: &mut HashSet<i64>, id: i64) {
    if !set.insert(id) {
        set.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::toggle;
    use std::collections::HashSet;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut set = HashSet::new();
        toggle(&mut set, 3);
        assert!(set.contains(&3));
        toggle(&mut set, 5);
        assert_eq!(set.len(), 2);
        toggle(&mut set, 3);
        assert!(!set.contains(&3));
        assert!(set.contains(&5));
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut set: HashSet<i64> = [1, 2].into_iter().collect();
        let before = set.clone();
        toggle(&mut set, 2);
        toggle(&mut set, 2);
        assert_eq!(set, before);
        toggle(&mut set, 9);
        toggle(&mut set, 9);
        assert_eq!(set, before);
    }
}
