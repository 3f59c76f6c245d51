//! Service calls for the commission-calculation tab.

use contracts::domain::comisiones::{
    CalcularComisionesRequest, ComisionesReport, ResumenComisiones,
};

use crate::shared::http;

/// Compute commissions for a date range; the server returns the full
/// report with the per-salesperson breakdown.
pub async fn calcular_comisiones(
    fecha_inicio: &str,
    fecha_fin: &str,
) -> Result<ComisionesReport, String> {
    let req = CalcularComisionesRequest {
        fecha_inicio: fecha_inicio.to_string(),
        fecha_fin: fecha_fin.to_string(),
    };
    http::post_json("/api/comisiones/calcular/", &req).await
}

/// Aggregate commission summary for a date range.
pub async fn get_resumen_comisiones(
    fecha_inicio: &str,
    fecha_fin: &str,
) -> Result<ResumenComisiones, String> {
    let path = format!(
        "/api/comisiones/resumen/?fecha_inicio={}&fecha_fin={}",
        fecha_inicio, fecha_fin
    );
    http::get_json(&path).await
}
