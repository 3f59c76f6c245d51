use leptos::prelude::*;
use thaw::*;

use crate::domain::ventas::ui::view_model::VentasViewModel;
use crate::shared::date_utils::format_date;
use crate::shared::format_utils::{format_currency, format_percentage};

const CARD_STYLE: &str = "background: var(--colorNeutralBackground1, #fff); \
     border: 1px solid var(--colorNeutralStroke1, #d1d1d1); \
     border-radius: 8px; padding: 16px; margin-bottom: 16px;";

const FIELD_LABEL_STYLE: &str = "display: block; margin-bottom: 4px; font-size: 0.875rem; font-weight: 500;";

const FIELD_INPUT_STYLE: &str = "padding: 6px 10px; font-size: 0.875rem; \
     border: 1px solid var(--colorNeutralStroke1, #d1d1d1); border-radius: 4px; min-width: 160px;";

/// Sales-management tab: new-sale form plus the sales table.
#[component]
#[allow(non_snake_case)]
pub fn VentasPage(vm: VentasViewModel) -> impl IntoView {
    let draft = vm.draft;
    let vendedores = vm.vendedores;
    let ventas = vm.ventas;
    let loading = vm.loading;

    view! {
        <div>
            // New-sale form
            <div style=CARD_STYLE>
                <h2 style="margin: 0 0 12px 0; font-size: 1.1rem;">"Agregar Nueva Venta"</h2>
                <div style="display: flex; gap: 16px; align-items: flex-end; flex-wrap: wrap;">
                    <div>
                        <label style=FIELD_LABEL_STYLE>"Vendedor"</label>
                        <select
                            style=FIELD_INPUT_STYLE
                            on:change=move |ev| {
                                draft.update(|d| d.vendedor = event_target_value(&ev));
                            }
                        >
                            <option value="" selected=move || draft.get().vendedor.is_empty()>
                                "Seleccionar vendedor..."
                            </option>
                            <For
                                each=move || vendedores.get()
                                key=|v| v.id
                                children=move |v| {
                                    let value = v.id.to_string();
                                    let value_for_selected = value.clone();
                                    let is_selected = move || draft.get().vendedor == value_for_selected;
                                    view! {
                                        <option value=value selected=is_selected>
                                            {v.nombre}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div>
                        <label style=FIELD_LABEL_STYLE>"Fecha de Venta"</label>
                        <input
                            type="date"
                            style=FIELD_INPUT_STYLE
                            prop:value=move || draft.get().fecha_venta
                            on:input=move |ev| {
                                draft.update(|d| d.fecha_venta = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div>
                        <label style=FIELD_LABEL_STYLE>"Monto"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            style=FIELD_INPUT_STYLE
                            prop:value=move || draft.get().monto
                            on:input=move |ev| {
                                draft.update(|d| d.monto = event_target_value(&ev));
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| vm.submit_command()
                    >
                        {move || if loading.get() { "Guardando..." } else { "Guardar Venta" }}
                    </Button>
                </div>
            </div>

            // Sales list
            <div style=CARD_STYLE>
                <h2 style="margin: 0 0 12px 0; font-size: 1.1rem;">"Lista de Ventas"</h2>
                {move || {
                    if loading.get() {
                        view! {
                            <div style="padding: 24px; text-align: center; color: var(--colorNeutralForeground3, #616161);">
                                "Cargando..."
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"ID"</TableHeaderCell>
                                        <TableHeaderCell>"Vendedor"</TableHeaderCell>
                                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                                        <TableHeaderCell>"Monto"</TableHeaderCell>
                                        <TableHeaderCell>"Comisión"</TableHeaderCell>
                                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {move || ventas.get().into_iter().map(|venta| {
                                        let id = venta.id;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{id}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {venta.vendedor_nombre}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_date(&venta.fecha_venta)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_currency(Some(venta.monto))}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_currency(Some(venta.comision_calculada.monto))}
                                                        <span style="color: var(--colorNeutralForeground3, #616161); font-size: 0.8rem; margin-left: 4px;">
                                                            {format!("({})", format_percentage(Some(venta.comision_calculada.porcentaje), 2))}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Secondary
                                                        disabled=Signal::derive(move || loading.get())
                                                        on_click=move |_| vm.delete_command(id)
                                                    >
                                                        "Eliminar"
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                    {move || ventas.get().is_empty().then(|| view! {
                                        <tr>
                                            <td
                                                colspan="6"
                                                style="padding: 16px; text-align: center; color: var(--colorNeutralForeground3, #616161);"
                                            >
                                                "No hay ventas registradas"
                                            </td>
                                        </tr>
                                    })}
                                </TableBody>
                            </Table>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
