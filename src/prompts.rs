//! Static prompt templates and final prompt assembly.
//!
//! The base instruction block pins the model to a single JSON object with
//! seven mandatory keys and explicit fallback values, so the response can be
//! parsed without repair. Category addenda sharpen the analysis for the
//! contract families the classifier recognizes.

use crate::classify::DocumentType;

pub const LEGAL_ANALYSIS_PROMPT: &str = r#"
Eres un abogado especialista en derecho contractual español con 15+ años de experiencia. Tu tarea es analizar el siguiente documento legal de forma exhaustiva pero comprensible para un directivo sin formación legal.

INSTRUCCIONES DE ANÁLISIS:

1.  **ESTRUCTURA DE RESPUESTA OBLIGATORIA:** Tu respuesta DEBE ser un único objeto JSON válido, sin texto adicional antes o después. El JSON debe contener las claves: "resumenEjecutivo", "riesgosCriticos", "riesgosMedios", "aspectosPositivos", "recomendacionesEspecificas", "proximosPasos", "respuestaConsulta".

2.  **CONTENIDO DE LAS CLAVES:**
    -   **resumenEjecutivo**: String. Un párrafo claro sobre las partes, objeto, duración y valor del documento.
    -   **riesgosCriticos**: Array de objetos. Cada objeto con la estructura \{titulo: "string", descripcion: "string", ubicacion: "string"\}. Identifica riesgos como responsabilidad ilimitada, penalizaciones abusivas (>10%), etc. Si no hay, devuelve [].
    -   **riesgosMedios**: Array de objetos. Cada objeto con la estructura \{titulo: "string", descripcion: "string"\}. Identifica riesgos como plazos ajustados, cláusulas ambiguas, etc. Si no hay, devuelve [].
    -   **aspectosPositivos**: Array de objetos. Cada objeto con la estructura \{fortaleza: "string", porque: "string"\}. Identifica cláusulas bien redactadas o ventajosas. Si no hay, devuelve [].
    -   **recomendacionesEspecificas**: Array de objetos. Cada objeto con la estructura \{accion: "string", explicacion: "string"\}. Deben ser consejos prácticos y accionables. Si no hay, devuelve [].
    -   **proximosPasos**: Array de strings. Lista de 2-3 acciones inmediatas o a medio plazo.
    -   **respuestaConsulta**: String. La respuesta a la pregunta específica del usuario sobre este documento. Si no hay pregunta, devuelve "N/A".

3.  **REGLAS IMPORTANTES:**
    -   Usa un lenguaje de negocio, no jerga legal.
    -   Sé conciso y directo.
    -   La ubicación del riesgo (Página X, Cláusula Y) es crucial.

DOCUMENTO A ANALIZAR:
"#;

const CONTRACT_SERVICES_CONTEXT: &str = "\n\nCONTEXTO DE ESPECIALIZACIÓN: Esto parece un Contrato de Servicios. Presta especial atención a: Alcance del trabajo (SOW), entregables, SLAs, condiciones de pago, propiedad intelectual y responsabilidad.";

const NDA_CONTEXT: &str = "\n\nCONTEXTO DE ESPECIALIZACIÓN: Esto parece un Acuerdo de Confidencialidad (NDA). Enfócate en: la definición de \"Información Confidencial\", duración de la obligación, exclusiones y consecuencias por incumplimiento.";

const EMPLOYMENT_CONTEXT: &str = "\n\nCONTEXTO DE ESPECIALIZACIÓN: Esto parece un Contrato Laboral. Analiza con detalle: Salario y beneficios, jornada, periodo de prueba, cláusulas de no competencia post-contractual y exclusividad.";

const LEASE_CONTEXT: &str = "\n\nCONTEXTO DE ESPECIALIZACIÓN: Esto parece un Contrato de Arrendamiento. Prioriza la revisión de: Duración del contrato y prórrogas, renta y su actualización (IPC), fianza, obras permitidas y responsabilidades de mantenimiento.";

pub const DOCUMENT_START_DELIMITER: &str = "--- INICIO DEL DOCUMENTO ---";
pub const DOCUMENT_END_DELIMITER: &str = "--- FIN DEL DOCUMENTO ---";
const USER_QUERY_DELIMITER: &str = "--- CONSULTA ADICIONAL DEL USUARIO ---";

/// Specialized addendum for a document type, or `None` for General.
pub fn specialized_context(doc_type: DocumentType) -> Option<&'static str> {
    match doc_type {
        DocumentType::ContractServices => Some(CONTRACT_SERVICES_CONTEXT),
        DocumentType::Nda => Some(NDA_CONTEXT),
        DocumentType::Employment => Some(EMPLOYMENT_CONTEXT),
        DocumentType::Lease => Some(LEASE_CONTEXT),
        DocumentType::General => None,
    }
}

/// Assemble the final prompt: base instructions, optional category addendum,
/// the document verbatim between delimiters, and the user's query when one
/// was provided. Same inputs always yield the same output.
pub fn build_prompt(doc_type: DocumentType, document_text: &str, user_query: Option<&str>) -> String {
    let mut prompt = String::with_capacity(
        LEGAL_ANALYSIS_PROMPT.len() + document_text.len() + 256,
    );
    prompt.push_str(LEGAL_ANALYSIS_PROMPT);

    if let Some(context) = specialized_context(doc_type) {
        prompt.push_str(context);
    }

    prompt.push_str("\n\n");
    prompt.push_str(DOCUMENT_START_DELIMITER);
    prompt.push('\n');
    prompt.push_str(document_text);
    prompt.push('\n');
    prompt.push_str(DOCUMENT_END_DELIMITER);

    if let Some(query) = user_query {
        let query = query.trim();
        if !query.is_empty() {
            prompt.push_str("\n\n");
            prompt.push_str(USER_QUERY_DELIMITER);
            prompt.push_str("\nConsiderando el documento, responde a esta pregunta específica: \"");
            prompt.push_str(query);
            prompt.push('"');
        }
    }

    prompt
}
