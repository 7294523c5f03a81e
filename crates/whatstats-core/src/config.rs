use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Function words plus chat boilerplate, curated for Portuguese exports.
const DEFAULT_STOPWORDS: &[&str] = &[
    // function words
    "de", "em", "um", "uma", "uns", "umas", "os", "as", "ao", "aos", "da", "das", "do", "dos",
    "no", "na", "nos", "nas", "num", "numa", "por", "para", "pra", "pro", "com", "sem", "sob",
    "sobre", "entre", "até", "desde", "que", "qual", "quais", "quando", "onde", "como", "porque",
    "então", "também", "já", "ainda", "sempre", "nunca", "muito", "muita", "muitos", "muitas",
    "pouco", "pouca", "mais", "menos", "mas", "mesmo", "mesma", "outro", "outra", "outros",
    "outras", "todo", "toda", "todos", "todas", "tudo", "nada", "cada", "algum", "alguma",
    "qualquer", "ele", "ela", "eles", "elas", "você", "vocês", "nós", "meu", "minha", "meus",
    "minhas", "teu", "tua", "seu", "sua", "seus", "suas", "nosso", "nossa", "este", "esta",
    "isto", "esse", "essa", "isso", "aquele", "aquela", "aquilo", "lhe", "lhes", "ser", "são",
    "foi", "era", "está", "estão", "estava", "ter", "tem", "têm", "tinha", "vai", "vou", "fazer",
    "faz", "fez", "há", "sim", "não", "nem", "assim", "aqui", "ali", "lá", "hoje", "ontem",
    "amanhã", "agora", "depois", "antes", "bem", "bom", "boa", "dia", "noite", "tarde", "olá",
    "obrigado", "obrigada",
    // exporter boilerplate that leaks into message text
    "ficheiro", "arquivo", "imagem", "vídeo", "áudio", "mídia", "media", "mensagem", "mensagens",
    "apagada", "editada", "omitted", "file", "null",
];

/// Placeholder texts the exporter writes in place of attachments.
const DEFAULT_MEDIA_MARKERS: &[&str] = &[
    "media omitted",
    "file not shown",
    "ficheiro não revelado",
    "mídia oculta",
    "imagem ocultada",
    "mensagem apagada",
];

/// Tunables for a pipeline run. Every field has a default; a TOML override
/// file may set any subset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Largest gap, in minutes, still counted as a reply between consecutive
    /// messages from different senders.
    pub reply_window_minutes: i64,
    /// Interaction pairs with fewer replies than this are dropped from the
    /// output. 1 keeps every observed pair.
    pub min_interaction_count: u64,
    /// Entries kept in the ranked word list.
    pub top_words: usize,
    pub language: LanguageProfile,
}

/// Language-specific word filtering, injected into the extractor so the
/// pipeline is not tied to one locale.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageProfile {
    pub stopwords: Vec<String>,
    pub media_markers: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reply_window_minutes: 5,
            min_interaction_count: 1,
            top_words: 100,
            language: LanguageProfile::default(),
        }
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            media_markers: DEFAULT_MEDIA_MARKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PipelineConfig {
    /// Reads a TOML override file. A missing file is not an error; the
    /// caller falls back to the defaults.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&raw)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.reply_window_minutes, 5);
        assert_eq!(config.min_interaction_count, 1);
        assert_eq!(config.top_words, 100);
        assert!(config.language.stopwords.iter().any(|w| w == "não"));
        assert!(!config.language.media_markers.is_empty());
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config: PipelineConfig = toml::from_str("reply_window_minutes = 10").unwrap();
        assert_eq!(config.reply_window_minutes, 10);
        assert_eq!(config.min_interaction_count, 1);
        assert_eq!(config.top_words, 100);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = PipelineConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_reads_overrides_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whatstats.toml");
        std::fs::write(&path, "top_words = 7\n").unwrap();

        let loaded = PipelineConfig::load(&path).unwrap().unwrap();
        assert_eq!(loaded.top_words, 7);
        assert_eq!(loaded.reply_window_minutes, 5);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whatstats.toml");
        std::fs::write(&path, "top_words = \"cem\"\n").unwrap();

        assert!(PipelineConfig::load(&path).is_err());
    }

    #[test]
    fn language_table_replaces_whole_profile_field() {
        let config: PipelineConfig = toml::from_str(
            "[language]\nstopwords = [\"foo\"]\n",
        )
        .unwrap();
        assert_eq!(config.language.stopwords, vec!["foo".to_string()]);
        // markers were not named, so the default set stays
        assert!(!config.language.media_markers.is_empty());
    }
}
