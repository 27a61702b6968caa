//! Keyword-based document type detection.
//!
//! A cheap, deterministic pre-filter that lets the prompt carry
//! category-specific guidance without a separate classification service.
//! The model downstream does the real interpretation, so approximate
//! matching is acceptable here.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    ContractServices,
    Nda,
    Employment,
    Lease,
    General,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::ContractServices => write!(f, "CONTRACT_SERVICES"),
            DocumentType::Nda => write!(f, "NDA"),
            DocumentType::Employment => write!(f, "EMPLOYMENT"),
            DocumentType::Lease => write!(f, "LEASE"),
            DocumentType::General => write!(f, "GENERAL"),
        }
    }
}

/// Only the start of the document is inspected; long contracts front-load
/// their identifying language and scanning megabytes buys nothing.
const DETECTION_WINDOW_CHARS: usize = 3000;

/// Declaration order is significant: the first category with a matching
/// keyword wins, regardless of how many keywords match overall.
const CLASSIFICATION_RULES: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::ContractServices,
        &[
            "servicios",
            "prestación de servicios",
            "desarrollo",
            "consultoría",
            "sla",
            "alcance del trabajo",
        ],
    ),
    (
        DocumentType::Nda,
        &[
            "confidencialidad",
            "secreto comercial",
            "información confidencial",
            "no divulgación",
            "nda",
        ],
    ),
    (
        DocumentType::Employment,
        &[
            "trabajador",
            "empleado",
            "salario",
            "jornada laboral",
            "contrato de trabajo",
        ],
    ),
    (
        DocumentType::Lease,
        &[
            "arrendamiento",
            "arrendador",
            "arrendatario",
            "alquiler",
            "inmueble",
            "local comercial",
        ],
    ),
];

/// Classify a document by its leading text. Always returns a value; unknown
/// content falls through to [`DocumentType::General`].
pub fn classify(text: &str) -> DocumentType {
    let window: String = text
        .chars()
        .take(DETECTION_WINDOW_CHARS)
        .collect::<String>()
        .to_lowercase();

    for (doc_type, keywords) in CLASSIFICATION_RULES {
        for keyword in *keywords {
            if contains_keyword(&window, keyword) {
                return *doc_type;
            }
        }
    }
    DocumentType::General
}

/// Substring search with word boundaries. Short keywords like "nda" or "sla"
/// would otherwise fire inside ordinary Spanish words ("arrendamiento",
/// "traslado") and misroute the document.
fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(keyword) {
        let begin = search_from + offset;
        let end = begin + keyword.len();
        let bounded_before = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let bounded_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if bounded_before && bounded_after {
            return true;
        }
        match haystack[begin..].chars().next() {
            Some(c) => search_from = begin + c.len_utf8(),
            None => break,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_document_is_detected() {
        assert_eq!(
            classify("Contrato de arrendamiento de local comercial entre las partes..."),
            DocumentType::Lease
        );
    }

    #[test]
    fn nda_document_is_detected() {
        assert_eq!(
            classify("Este NDA protege información confidencial"),
            DocumentType::Nda
        );
    }

    #[test]
    fn unknown_content_falls_back_to_general() {
        assert_eq!(classify("Hola mundo"), DocumentType::General);
        assert_eq!(classify(""), DocumentType::General);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify("ACUERDO DE CONFIDENCIALIDAD ENTRE LAS PARTES"),
            DocumentType::Nda
        );
    }

    #[test]
    fn declaration_order_breaks_ties() {
        // Contains both a services keyword and an NDA keyword; services wins
        // because its category is declared first.
        assert_eq!(
            classify("Contrato de prestación de servicios con cláusula de confidencialidad"),
            DocumentType::ContractServices
        );
        // Employment is declared before lease.
        assert_eq!(
            classify("El trabajador ocupará el inmueble durante la obra"),
            DocumentType::Employment
        );
    }

    #[test]
    fn priority_ignores_keyword_position_in_text() {
        // The lease keyword appears first in the text, but NDA is the earlier
        // category in declaration order.
        assert_eq!(
            classify("Sobre el alquiler pactado rige un acuerdo de no divulgación"),
            DocumentType::Nda
        );
    }

    #[test]
    fn keywords_beyond_the_window_are_ignored() {
        let mut text = "palabra ".repeat(400); // 3200 chars of filler
        text.push_str("contrato de arrendamiento");
        assert_eq!(classify(&text), DocumentType::General);
    }

    #[test]
    fn keywords_inside_the_window_are_seen() {
        let mut text = "palabra ".repeat(10);
        text.push_str("alquiler de vivienda");
        assert_eq!(classify(&text), DocumentType::Lease);
    }

    #[test]
    fn short_keywords_do_not_match_inside_words() {
        // "arrendamiento" contains "nda" and "traslado" contains "sla";
        // neither may trigger a match on its own.
        assert!(!contains_keyword("arrendamiento", "nda"));
        assert!(!contains_keyword("el traslado del personal", "sla"));
        assert!(contains_keyword("este nda firmado", "nda"));
        assert!(contains_keyword("el sla pactado", "sla"));
    }

    #[test]
    fn classification_is_pure() {
        let text = "Contrato de trabajo con periodo de prueba";
        assert_eq!(classify(text), classify(text));
    }
}
