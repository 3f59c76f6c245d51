use contracts::domain::comisiones::VendedorComisiones;
use leptos::prelude::*;
use thaw::*;

use crate::domain::comisiones::ui::view_model::ComisionesViewModel;
use crate::shared::format_utils::{format_currency, format_percentage};

const CARD_STYLE: &str = "background: var(--colorNeutralBackground1, #fff); \
     border: 1px solid var(--colorNeutralStroke1, #d1d1d1); \
     border-radius: 8px; padding: 16px; margin-bottom: 16px;";

const FIELD_LABEL_STYLE: &str = "display: block; margin-bottom: 4px; font-size: 0.875rem; font-weight: 500;";

const FIELD_INPUT_STYLE: &str = "padding: 6px 10px; font-size: 0.875rem; \
     border: 1px solid var(--colorNeutralStroke1, #d1d1d1); border-radius: 4px; min-width: 160px;";

const MUTED_STYLE: &str = "color: var(--colorNeutralForeground3, #616161); font-size: 0.8rem;";

/// Commission-calculation tab: date-range filter, report summary and the
/// expandable per-salesperson breakdown.
#[component]
#[allow(non_snake_case)]
pub fn ComisionesPage(vm: ComisionesViewModel) -> impl IntoView {
    let fecha_inicio = vm.fecha_inicio;
    let fecha_fin = vm.fecha_fin;
    let report = vm.report;
    let loading = vm.loading;

    view! {
        <div>
            // Date-range filter
            <div style=CARD_STYLE>
                <h2 style="margin: 0 0 12px 0; font-size: 1.1rem;">
                    "Calcular Comisiones por Rango de Fechas"
                </h2>
                <div style="display: flex; gap: 16px; align-items: flex-end; flex-wrap: wrap;">
                    <div>
                        <label style=FIELD_LABEL_STYLE>"Fecha Inicio"</label>
                        <input
                            type="date"
                            style=FIELD_INPUT_STYLE
                            prop:value=move || fecha_inicio.get()
                            on:input=move |ev| fecha_inicio.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label style=FIELD_LABEL_STYLE>"Fecha Fin"</label>
                        <input
                            type="date"
                            style=FIELD_INPUT_STYLE
                            prop:value=move || fecha_fin.get()
                            on:input=move |ev| fecha_fin.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| vm.calcular_command()
                    >
                        {move || if loading.get() { "Calculando..." } else { "Calcular Comisiones" }}
                    </Button>
                </div>
            </div>

            // Report, replaced wholesale on each computation
            {move || report.get().map(|rep| {
                let periodo = format!(
                    "({} - {})",
                    rep.periodo_info.fecha_inicio_formateada,
                    rep.periodo_info.fecha_fin_formateada
                );
                view! {
                    <div style=CARD_STYLE>
                        <h2 style="margin: 0 0 12px 0; font-size: 1.1rem;">
                            "Resumen de Comisiones "
                            <span style=MUTED_STYLE>{periodo}</span>
                        </h2>
                        <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px;">
                            <StatBlock value=rep.total_vendedores.to_string() label="Vendedores" />
                            <StatBlock value=rep.total_ventas.to_string() label="Ventas" />
                            <StatBlock value=format_currency(Some(rep.total_monto_ventas)) label="Total Ventas" />
                            <StatBlock value=format_currency(Some(rep.total_comisiones)) label="Total Comisiones" />
                        </div>
                    </div>

                    <div style=CARD_STYLE>
                        <h2 style="margin: 0 0 4px 0; font-size: 1.1rem;">"Comisiones por Vendedor"</h2>
                        <p style=format!("{} margin: 0 0 12px 0;", MUTED_STYLE)>
                            "Haz clic en un vendedor para ver el detalle de sus comisiones individuales"
                        </p>
                        {rep.vendedores.into_iter().map(|v| {
                            view! { <VendedorRow vm=vm vendedor=v /> }
                        }).collect_view()}
                    </div>
                }
            })}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn StatBlock(value: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 8px; background: var(--colorNeutralBackground3, #f5f5f5); border-radius: 6px;">
            <div style="font-size: 1.4rem; font-weight: 600;">{value}</div>
            <div style=MUTED_STYLE>{label}</div>
        </div>
    }
}

/// One expandable salesperson row of the breakdown list.
#[component]
#[allow(non_snake_case)]
fn VendedorRow(vm: ComisionesViewModel, vendedor: VendedorComisiones) -> impl IntoView {
    let id = vendedor.vendedor_id;
    let nombre = vendedor.vendedor_nombre.clone();
    let total_ventas = vendedor.total_ventas;
    let total_monto = format_currency(Some(vendedor.total_monto_ventas));
    let total_comisiones = format_currency(Some(vendedor.total_comisiones));
    let porcentaje = format_percentage(Some(vendedor.porcentaje_promedio), 2);
    let detalle = vendedor.comisiones_individuales;

    // Clones for the totals row of the detail table.
    let det_total_monto = total_monto.clone();
    let det_total_comisiones = total_comisiones.clone();
    let det_porcentaje = porcentaje.clone();

    let chevron_style = move || {
        if vm.is_expanded(id) {
            "display: inline-block; margin-right: 12px; transform: rotate(90deg); transition: transform 0.15s;"
        } else {
            "display: inline-block; margin-right: 12px; transform: rotate(0deg); transition: transform 0.15s;"
        }
    };

    view! {
        <div style="margin-bottom: 8px;">
            <div
                on:click=move |_| vm.toggle_expanded(id)
                style="display: flex; align-items: center; padding: 12px; cursor: pointer; \
                       background: var(--colorNeutralBackground3, #f5f5f5); \
                       border: 1px solid var(--colorNeutralStroke1, #d1d1d1); border-radius: 6px;"
            >
                <span style=chevron_style>"▶"</span>
                <div style="display: flex; justify-content: space-between; align-items: center; width: 100%;">
                    <div style="font-weight: 600;">{nombre}</div>
                    <div style="display: flex; gap: 24px; align-items: center;">
                        <div style="text-align: center;">
                            <div style=MUTED_STYLE>"Ventas"</div>
                            <div style="font-weight: 600;">{total_ventas}</div>
                        </div>
                        <div style="text-align: center;">
                            <div style=MUTED_STYLE>"Total Vendido"</div>
                            <div style="font-weight: 600;">{total_monto}</div>
                        </div>
                        <div style="text-align: center;">
                            <div style=MUTED_STYLE>"Comisiones"</div>
                            <div style="font-weight: 600;">{total_comisiones}</div>
                        </div>
                        <div style="text-align: center;">
                            <div style=MUTED_STYLE>"% Promedio"</div>
                            <div style="font-weight: 600;">{porcentaje}</div>
                        </div>
                    </div>
                </div>
            </div>

            {move || vm.is_expanded(id).then({
                let detalle = detalle.clone();
                let det_total_monto = det_total_monto.clone();
                let det_total_comisiones = det_total_comisiones.clone();
                let det_porcentaje = det_porcentaje.clone();
                move || {
                let is_empty = detalle.is_empty();
                let filas = detalle.into_iter().map(|c| view! {
                    <TableRow>
                        <TableCell>
                            <TableCellLayout>{format!("#{}", c.id)}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{c.fecha.clone()}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{format_currency(Some(c.monto_venta))}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{format_percentage(Some(c.porcentaje_aplicado), 2)}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{format_currency(Some(c.monto_comision))}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{c.regla_aplicada.descripcion.clone()}</TableCellLayout>
                        </TableCell>
                    </TableRow>
                }).collect_view();

                if is_empty {
                    view! {
                        <div style="padding: 16px; text-align: center; color: var(--colorNeutralForeground3, #616161); \
                                    border: 1px solid var(--colorNeutralStroke1, #d1d1d1); border-top: none; \
                                    border-radius: 0 0 6px 6px;">
                            "No hay comisiones individuales para este vendedor en el período seleccionado"
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div style="border: 1px solid var(--colorNeutralStroke1, #d1d1d1); border-top: none; \
                                    border-radius: 0 0 6px 6px; overflow: hidden;">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"ID"</TableHeaderCell>
                                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                                        <TableHeaderCell>"Monto Venta"</TableHeaderCell>
                                        <TableHeaderCell>"% Aplicado"</TableHeaderCell>
                                        <TableHeaderCell>"Comisión"</TableHeaderCell>
                                        <TableHeaderCell>"Regla"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {filas}
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">"TOTAL"</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>""</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">{det_total_monto.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">{det_porcentaje.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 600;">{det_total_comisiones.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format!("{} ventas", total_ventas)}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                </TableBody>
                            </Table>
                        </div>
                    }
                    .into_any()
                }
                }
            })}
        </div>
    }
}
