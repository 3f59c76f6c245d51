//! Service calls for the sales-management tab.
//!
//! One function per endpoint; each performs a single HTTP call through
//! [`crate::shared::http`] and decodes the body. No validation, no
//! retries, no caching here.

use contracts::domain::regla::Regla;
use contracts::domain::vendedor::Vendedor;
use contracts::domain::venta::{ActualizarVentaRequest, CrearVentaRequest, Venta, VentasFiltro};

use crate::shared::http;

/// List all salespeople.
pub async fn get_vendedores() -> Result<Vec<Vendedor>, String> {
    http::get_json("/api/vendedores/").await
}

/// List active commission rules.
pub async fn get_reglas() -> Result<Vec<Regla>, String> {
    http::get_json("/api/reglas/").await
}

/// List sales, optionally filtered by salesperson and date range.
pub async fn get_ventas(filtro: &VentasFiltro) -> Result<Vec<Venta>, String> {
    let mut path = String::from("/api/ventas/");
    let mut sep = '?';
    if let Some(vendedor) = filtro.vendedor {
        path.push_str(&format!("{}vendedor={}", sep, vendedor));
        sep = '&';
    }
    if let Some(desde) = &filtro.fecha_inicio {
        path.push_str(&format!("{}fecha_inicio={}", sep, desde));
        sep = '&';
    }
    if let Some(hasta) = &filtro.fecha_fin {
        path.push_str(&format!("{}fecha_fin={}", sep, hasta));
    }
    http::get_json(&path).await
}

/// Create a sale; returns the created record.
pub async fn crear_venta(req: &CrearVentaRequest) -> Result<Venta, String> {
    http::post_json("/api/ventas/", req).await
}

/// Update fields of an existing sale.
pub async fn actualizar_venta(id: i64, req: &ActualizarVentaRequest) -> Result<Venta, String> {
    http::put_json(&format!("/api/ventas/{}/", id), req).await
}

/// Delete a sale by id.
pub async fn eliminar_venta(id: i64) -> Result<(), String> {
    http::delete(&format!("/api/ventas/{}/", id)).await
}
