use serde::{Deserialize, Serialize};

/// Body of `POST /api/comisiones/calcular/`. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcularComisionesRequest {
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

/// Period metadata the server pre-formats for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodoInfo {
    pub dias_total: i64,
    pub fecha_inicio_formateada: String,
    pub fecha_fin_formateada: String,
}

/// Rule that produced one individual commission line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReglaAplicada {
    pub id: Option<i64>,
    pub descripcion: String,
}

/// One commission line inside a salesperson's breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComisionIndividual {
    pub id: i64,
    /// Pre-formatted by the server (`DD/MM/YYYY`).
    pub fecha: String,
    pub monto_venta: f64,
    pub porcentaje_aplicado: f64,
    pub monto_comision: f64,
    pub regla_aplicada: ReglaAplicada,
}

/// Per-salesperson aggregate inside the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendedorComisiones {
    pub vendedor_id: i64,
    pub vendedor_nombre: String,
    pub total_ventas: u32,
    pub total_monto_ventas: f64,
    pub total_comisiones: f64,
    pub porcentaje_promedio: f64,
    #[serde(default)]
    pub comisiones_individuales: Vec<ComisionIndividual>,
}

/// Full response of `POST /api/comisiones/calcular/`.
///
/// Replaced wholesale on every computation; the client never merges two
/// reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComisionesReport {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub total_vendedores: u32,
    pub total_ventas: u32,
    pub total_monto_ventas: f64,
    pub total_comisiones: f64,
    pub periodo_info: PeriodoInfo,
    pub vendedores: Vec<VendedorComisiones>,
}

/// `periodo` block of the summary endpoint; either bound may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Periodo {
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenDatos {
    pub total_ventas: u32,
    pub total_monto_ventas: f64,
    pub total_comisiones: f64,
    pub promedio_comision_por_venta: f64,
    pub porcentaje_comision_total: f64,
}

/// Response of `GET /api/comisiones/resumen/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenComisiones {
    pub periodo: Periodo,
    pub resumen: ResumenDatos,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = CalcularComisionesRequest {
            fecha_inicio: "2024-05-01".to_string(),
            fecha_fin: "2024-05-31".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"fecha_inicio":"2024-05-01","fecha_fin":"2024-05-31"}"#
        );
    }

    #[test]
    fn test_deserialize_report() {
        let report: ComisionesReport = serde_json::from_str(
            r#"{
                "fecha_inicio": "2024-05-01",
                "fecha_fin": "2024-05-31",
                "total_vendedores": 1,
                "total_ventas": 2,
                "total_monto_ventas": 300.0,
                "total_comisiones": 30.0,
                "periodo_info": {
                    "dias_total": 31,
                    "fecha_inicio_formateada": "01/05/2024",
                    "fecha_fin_formateada": "31/05/2024"
                },
                "vendedores": [
                    {
                        "vendedor_id": 3,
                        "vendedor_nombre": "Ana",
                        "total_ventas": 2,
                        "total_monto_ventas": 300.0,
                        "total_comisiones": 30.0,
                        "porcentaje_promedio": 0.1,
                        "comisiones_individuales": [
                            {
                                "id": 11,
                                "fecha": "10/05/2024",
                                "monto_venta": 100.0,
                                "porcentaje_aplicado": 0.1,
                                "monto_comision": 10.0,
                                "regla_aplicada": {"id": 2, "descripcion": "10.00% - Min: $0"}
                            },
                            {
                                "id": 12,
                                "fecha": "20/05/2024",
                                "monto_venta": 200.0,
                                "porcentaje_aplicado": 0.1,
                                "monto_comision": 20.0,
                                "regla_aplicada": {"id": null, "descripcion": "Sin regla aplicable"}
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(report.total_ventas, 2);
        assert_eq!(report.total_monto_ventas, 300.0);
        assert_eq!(report.total_comisiones, 30.0);
        assert_eq!(report.vendedores.len(), 1);
        let v = &report.vendedores[0];
        assert_eq!(v.total_comisiones, 30.0);
        assert_eq!(v.comisiones_individuales.len(), 2);
        assert_eq!(v.comisiones_individuales[1].regla_aplicada.id, None);
    }

    #[test]
    fn test_deserialize_resumen_with_open_period() {
        let resumen: ResumenComisiones = serde_json::from_str(
            r#"{
                "periodo": {"fecha_inicio": null, "fecha_fin": "2024-05-31"},
                "resumen": {
                    "total_ventas": 4,
                    "total_monto_ventas": 1000.0,
                    "total_comisiones": 80.0,
                    "promedio_comision_por_venta": 20.0,
                    "porcentaje_comision_total": 8.0
                }
            }"#,
        )
        .unwrap();
        assert!(resumen.periodo.fecha_inicio.is_none());
        assert_eq!(resumen.resumen.total_ventas, 4);
    }
}
