//! Cleanup and parsing of the model's reply.
//!
//! The model is instructed to return bare JSON, but in practice it sometimes
//! wraps the object in Markdown code fences. Stripping removes every fence
//! marker and surrounding whitespace; parsing is then a plain JSON parse with
//! lenient field defaulting. No repair or retry is attempted on failure.

use crate::models::AnalysisResult;
use crate::types::{AppError, AppResult};

/// Remove ```json / ``` fence markers and trim. Idempotent: stripping an
/// already-clean reply is a no-op.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Strip fences and parse the reply as an [`AnalysisResult`].
pub fn parse_analysis(raw: &str) -> AppResult<AnalysisResult> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| AppError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_REPLY: &str = r#"{
        "resumenEjecutivo": "Arrendamiento de local comercial por 5 años.",
        "riesgosCriticos": [
            {"titulo": "Penalización abusiva", "descripcion": "15% por resolución anticipada.", "ubicacion": "Cláusula 9"}
        ],
        "riesgosMedios": [{"titulo": "Plazo de preaviso corto", "descripcion": "Solo 15 días."}],
        "aspectosPositivos": [{"fortaleza": "Renta fija", "porque": "Sin revisión al IPC los dos primeros años."}],
        "recomendacionesEspecificas": [{"accion": "Negociar la penalización", "explicacion": "Reducirla por debajo del 10%."}],
        "proximosPasos": ["Revisar la fianza", "Consultar con el asesor fiscal"],
        "respuestaConsulta": "N/A"
    }"#;

    #[test]
    fn fenced_and_bare_replies_parse_identically() {
        let bare = parse_analysis(SAMPLE_REPLY).unwrap();
        let fenced = parse_analysis(&format!("```json\n{SAMPLE_REPLY}\n```")).unwrap();
        assert_eq!(
            serde_json::to_value(&bare).unwrap(),
            serde_json::to_value(&fenced).unwrap()
        );
    }

    #[test]
    fn stripping_is_idempotent() {
        let once = strip_code_fences("```json\n{\"a\": 1}\n```");
        let twice = strip_code_fences(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "{\"a\": 1}");
    }

    #[test]
    fn bare_fences_without_language_tag_are_stripped() {
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(strip_code_fences("  \n{}\n  "), "{}");
    }

    #[test]
    fn parsed_fields_survive_the_round_trip() {
        let result = parse_analysis(SAMPLE_REPLY).unwrap();
        assert_eq!(
            result.resumen_ejecutivo,
            "Arrendamiento de local comercial por 5 años."
        );
        assert_eq!(result.riesgos_criticos.len(), 1);
        assert_eq!(result.riesgos_criticos[0].ubicacion, "Cláusula 9");
        assert_eq!(result.proximos_pasos.len(), 2);
        assert_eq!(result.respuesta_consulta, "N/A");
    }

    #[test]
    fn non_json_reply_is_a_malformed_response_error() {
        let err = parse_analysis("Lo siento, no puedo analizar este documento.").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));

        let err = parse_analysis("```json\n{truncated").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
