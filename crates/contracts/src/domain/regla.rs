use serde::{Deserialize, Serialize};

/// Commission rule: a percentage applied from a minimum sale amount up.
///
/// The rules themselves are only ever applied server-side; the client
/// fetches them as reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regla {
    pub id: i64,
    #[serde(deserialize_with = "crate::shared::decimal::deserialize")]
    pub porcentaje: f64,
    #[serde(default)]
    pub porcentaje_display: Option<String>,
    #[serde(deserialize_with = "crate::shared::decimal::deserialize")]
    pub monto_minimo: f64,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    #[serde(default)]
    pub activa: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_drf_shape() {
        let r: Regla = serde_json::from_str(
            r#"{
                "id": 2,
                "porcentaje": "0.1000",
                "porcentaje_display": "10.00%",
                "monto_minimo": "500.00",
                "fecha_creacion": "2024-01-01T00:00:00Z",
                "activa": true
            }"#,
        )
        .unwrap();
        assert_eq!(r.porcentaje, 0.1);
        assert_eq!(r.monto_minimo, 500.0);
        assert!(r.activa);
    }
}
