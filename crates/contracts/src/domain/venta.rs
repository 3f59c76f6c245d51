use serde::{Deserialize, Serialize};

/// Commission the server computed for one sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComisionCalculada {
    #[serde(deserialize_with = "crate::shared::decimal::deserialize")]
    pub monto: f64,
    #[serde(deserialize_with = "crate::shared::decimal::deserialize")]
    pub porcentaje: f64,
    #[serde(default)]
    pub regla_id: Option<i64>,
}

/// A recorded sale, as listed by `GET /api/ventas/`.
///
/// Read-only on the client; mutations go through the create/update/delete
/// requests below and the list is refetched afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venta {
    pub id: i64,
    /// Salesperson id.
    pub vendedor: i64,
    #[serde(default)]
    pub vendedor_nombre: String,
    /// `YYYY-MM-DD`.
    pub fecha_venta: String,
    #[serde(deserialize_with = "crate::shared::decimal::deserialize")]
    pub monto: f64,
    pub comision_calculada: ComisionCalculada,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    #[serde(default)]
    pub fecha_modificacion: Option<String>,
}

/// Body of `POST /api/ventas/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrearVentaRequest {
    pub vendedor: i64,
    pub fecha_venta: String,
    pub monto: f64,
}

/// Body of `PUT /api/ventas/{id}/`; omitted fields stay untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActualizarVentaRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendedor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_venta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monto: Option<f64>,
}

/// Optional query filters of `GET /api/ventas/`.
#[derive(Debug, Clone, Default)]
pub struct VentasFiltro {
    pub vendedor: Option<i64>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listed_sale() {
        // DRF emits the DecimalField `monto` as a string and the computed
        // commission as plain numbers.
        let v: Venta = serde_json::from_str(
            r#"{
                "id": 11,
                "vendedor": 3,
                "vendedor_nombre": "Ana",
                "fecha_venta": "2024-05-10",
                "monto": "150.00",
                "comision_calculada": {"monto": 15.0, "porcentaje": 0.1, "regla_id": 2},
                "fecha_creacion": "2024-05-10T12:00:00Z",
                "fecha_modificacion": "2024-05-10T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(v.monto, 150.0);
        assert_eq!(v.comision_calculada.porcentaje, 0.1);
        assert_eq!(v.comision_calculada.regla_id, Some(2));
    }

    #[test]
    fn test_update_request_skips_missing_fields() {
        let req = ActualizarVentaRequest {
            monto: Some(99.5),
            ..Default::default()
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"monto":99.5}"#);
    }
}
