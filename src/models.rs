use std::sync::Arc;

use crate::config::Config;
use crate::llm::Llm;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup so the underlying HTTP client and its
    /// connection pool are shared across requests.
    pub llm: Arc<Llm>,
}

// Wire types for the analysis response. The JSON keys (resumenEjecutivo,
// riesgosCriticos, ...) are what the frontend expects; they are produced by
// the model following the instructions in the base prompt.
//
// Parsing is deliberately lenient: every field defaults when absent, so the
// only hard failure is a response that is not valid JSON at all.

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub resumen_ejecutivo: String,
    pub riesgos_criticos: Vec<CriticalRisk>,
    pub riesgos_medios: Vec<MediumRisk>,
    pub aspectos_positivos: Vec<PositiveAspect>,
    pub recomendaciones_especificas: Vec<Recommendation>,
    pub proximos_pasos: Vec<String>,
    /// Answer to the user's free-form query, or "N/A" when no query was sent.
    pub respuesta_consulta: String,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CriticalRisk {
    pub titulo: String,
    pub descripcion: String,
    /// Where in the document the risk was found (e.g. "Página 2, Cláusula 5").
    pub ubicacion: String,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MediumRisk {
    pub titulo: String,
    pub descripcion: String,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PositiveAspect {
    pub fortaleza: String,
    pub porque: String,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Recommendation {
    pub accion: String,
    pub explicacion: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub model: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_serializes_with_camel_case_keys() {
        let result = AnalysisResult {
            resumen_ejecutivo: "Contrato de servicios entre A y B.".to_string(),
            respuesta_consulta: "N/A".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["resumenEjecutivo"], "Contrato de servicios entre A y B.");
        assert_eq!(value["respuestaConsulta"], "N/A");
        assert!(value["riesgosCriticos"].as_array().unwrap().is_empty());
        assert!(value["proximosPasos"].as_array().unwrap().is_empty());
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"resumenEjecutivo": "Solo un resumen."}"#).unwrap();
        assert_eq!(result.resumen_ejecutivo, "Solo un resumen.");
        assert!(result.riesgos_criticos.is_empty());
        assert!(result.respuesta_consulta.is_empty());
    }

    #[test]
    fn risk_items_tolerate_partial_objects() {
        let result: AnalysisResult = serde_json::from_str(
            r#"{"riesgosCriticos": [{"titulo": "Responsabilidad ilimitada"}]}"#,
        )
        .unwrap();
        assert_eq!(result.riesgos_criticos.len(), 1);
        assert_eq!(result.riesgos_criticos[0].titulo, "Responsabilidad ilimitada");
        assert!(result.riesgos_criticos[0].ubicacion.is_empty());
    }
}
