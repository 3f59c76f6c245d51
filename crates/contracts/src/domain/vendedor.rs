use serde::{Deserialize, Serialize};

/// Salesperson reference data.
///
/// `total_ventas` / `total_comisiones` are aggregate convenience fields the
/// serializer computes per salesperson; older deployments omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendedor {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
    #[serde(default)]
    pub total_ventas: Option<u32>,
    #[serde(default, deserialize_with = "crate::shared::decimal::deserialize_opt")]
    pub total_comisiones: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_and_full() {
        let v: Vendedor = serde_json::from_str(r#"{"id": 3, "nombre": "Ana"}"#).unwrap();
        assert_eq!(v.id, 3);
        assert_eq!(v.nombre, "Ana");
        assert!(v.total_ventas.is_none());

        let v: Vendedor = serde_json::from_str(
            r#"{
                "id": 1,
                "nombre": "Luis",
                "fecha_creacion": "2024-01-02T10:00:00Z",
                "total_ventas": 7,
                "total_comisiones": 42.5
            }"#,
        )
        .unwrap();
        assert_eq!(v.total_ventas, Some(7));
        assert_eq!(v.total_comisiones, Some(42.5));
    }
}
