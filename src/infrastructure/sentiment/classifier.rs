//! Candle-backed binary sentiment classifier
//!
//! Loads a pretrained BERT sequence classifier and tokenizer once from a
//! fixed on-disk directory; immutable and reusable afterwards. Batch
//! encoding truncates each sequence at the caller's cap and pads to the
//! longest sequence in the batch.

use candle_core::{DType, Device, Tensor, D};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::Config;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tokenizers::Tokenizer;
use tracing::info;

use super::model::BertForSequenceClassification;
use crate::domain::{ClassifierError, SentimentClassifier, SentimentLabel};
use crate::infrastructure::config::ModelConfig;

impl From<candle_core::Error> for ClassifierError {
    fn from(value: candle_core::Error) -> Self {
        Self::Inference(value.to_string())
    }
}

/// Classification-head fields of the checkpoint's `config.json` that the
/// encoder config does not expose
#[derive(Deserialize)]
struct ClassifierHeadConfig {
    hidden_size: usize,
    #[serde(default)]
    id2label: HashMap<String, String>,
}

/// One tokenized sequence before batching
struct TokenRow {
    ids: Vec<u32>,
    type_ids: Vec<u32>,
    attention_mask: Vec<u32>,
}

/// Flattened, equal-length rows ready for tensor construction
struct PaddedBatch {
    ids: Vec<u32>,
    type_ids: Vec<u32>,
    attention_mask: Vec<u32>,
    seq_len: usize,
}

/// Truncate every row at `max_len`, then pad all rows to the longest
/// remaining sequence. Mask and type-id padding is 0.
fn truncate_and_pad(mut rows: Vec<TokenRow>, max_len: usize, pad_id: u32) -> PaddedBatch {
    for row in &mut rows {
        row.ids.truncate(max_len);
        row.type_ids.truncate(max_len);
        row.attention_mask.truncate(max_len);
    }

    let seq_len = rows.iter().map(|r| r.ids.len()).max().unwrap_or(0);
    let mut batch = PaddedBatch {
        ids: Vec::with_capacity(rows.len() * seq_len),
        type_ids: Vec::with_capacity(rows.len() * seq_len),
        attention_mask: Vec::with_capacity(rows.len() * seq_len),
        seq_len,
    };

    for mut row in rows {
        row.ids.resize(seq_len, pad_id);
        row.type_ids.resize(seq_len, 0);
        row.attention_mask.resize(seq_len, 0);
        batch.ids.extend(row.ids);
        batch.type_ids.extend(row.type_ids);
        batch.attention_mask.extend(row.attention_mask);
    }

    batch
}

/// Binary sentiment classifier over a pretrained BERT checkpoint
pub struct BertSentimentClassifier {
    model: BertForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
}

impl BertSentimentClassifier {
    /// Loads model and tokenizer from `config.model_dir`.
    ///
    /// Expects `config.json`, `tokenizer.json` and `model.safetensors`
    /// (falling back to `pytorch_model.bin`) in the directory.
    pub fn load(config: &ModelConfig) -> Result<Self, ClassifierError> {
        let device = Device::Cpu;
        let dir = &config.model_dir;

        let config_str = std::fs::read_to_string(dir.join("config.json"))
            .map_err(|e| ClassifierError::ModelLoad(format!("read config.json: {e}")))?;
        let bert_config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ClassifierError::ModelLoad(format!("parse config.json: {e}")))?;
        let head_config: ClassifierHeadConfig = serde_json::from_str(&config_str)
            .map_err(|e| ClassifierError::ModelLoad(format!("parse classifier head config: {e}")))?;
        let num_labels = if head_config.id2label.is_empty() {
            2
        } else {
            head_config.id2label.len()
        };

        let tokenizer = Tokenizer::from_file(dir.join("tokenizer.json"))
            .map_err(|e| ClassifierError::ModelLoad(format!("load tokenizer: {e}")))?;

        let vb = Self::load_weights(dir, &device)?;
        let model = BertForSequenceClassification::load(
            vb,
            &bert_config,
            head_config.hidden_size,
            num_labels,
        )
        .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;

        info!(
            "Sentiment model loaded from {:?} ({} labels)",
            dir, num_labels
        );

        Ok(Self {
            model,
            tokenizer,
            device,
        })
    }

    #[allow(unsafe_code)] // mmapped weight loading is the candle-sanctioned path
    fn load_weights(dir: &Path, device: &Device) -> Result<VarBuilder<'static>, ClassifierError> {
        let safetensors = dir.join("model.safetensors");
        if safetensors.exists() {
            let vb = unsafe {
                VarBuilder::from_mmaped_safetensors(&[safetensors], DType::F32, device)
            }
            .map_err(|e| ClassifierError::ModelLoad(e.to_string()))?;
            return Ok(vb);
        }

        let pth = dir.join("pytorch_model.bin");
        if pth.exists() {
            return VarBuilder::from_pth(&pth, DType::F32, device)
                .map_err(|e| ClassifierError::ModelLoad(e.to_string()));
        }

        Err(ClassifierError::ModelLoad(format!(
            "no model weights found in {dir:?}"
        )))
    }

    /// Encodes a batch into the three parallel `[batch, seq]` tensors
    fn encode_batch(
        &self,
        texts: &[&str],
        max_len: usize,
    ) -> Result<(Tensor, Tensor, Tensor), ClassifierError> {
        let encodings = self
            .tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| ClassifierError::Tokenization(e.to_string()))?;

        let pad_id = self
            .tokenizer
            .get_padding()
            .map(|p| p.pad_id)
            .or_else(|| self.tokenizer.token_to_id("[PAD]"))
            .unwrap_or(0);

        let rows: Vec<TokenRow> = encodings
            .iter()
            .map(|encoding| TokenRow {
                ids: encoding.get_ids().to_vec(),
                type_ids: encoding.get_type_ids().to_vec(),
                attention_mask: encoding.get_attention_mask().to_vec(),
            })
            .collect();

        let batch = truncate_and_pad(rows, max_len, pad_id);
        let shape = (texts.len(), batch.seq_len);

        let input_ids = Tensor::from_vec(batch.ids, shape, &self.device)?;
        let type_ids = Tensor::from_vec(batch.type_ids, shape, &self.device)?;
        let attention_mask = Tensor::from_vec(batch.attention_mask, shape, &self.device)?;

        Ok((input_ids, type_ids, attention_mask))
    }
}

impl SentimentClassifier for BertSentimentClassifier {
    fn classify_batch(
        &self,
        texts: &[&str],
        max_len: usize,
    ) -> Result<Vec<SentimentLabel>, ClassifierError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let (input_ids, type_ids, attention_mask) = self.encode_batch(texts, max_len)?;
        let logits = self.model.forward(&input_ids, &type_ids, &attention_mask)?;
        let class_indices = logits.argmax(D::Minus1)?.to_vec1::<u32>()?;

        if class_indices.len() != texts.len() {
            return Err(ClassifierError::OutputMismatch {
                expected: texts.len(),
                got: class_indices.len(),
            });
        }

        class_indices
            .into_iter()
            .map(|index| {
                SentimentLabel::from_class_index(index as usize).ok_or_else(|| {
                    ClassifierError::Inference(format!(
                        "class index {index} outside the binary label set"
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ids: &[u32]) -> TokenRow {
        TokenRow {
            ids: ids.to_vec(),
            type_ids: vec![0; ids.len()],
            attention_mask: vec![1; ids.len()],
        }
    }

    #[test]
    fn pads_shorter_rows_to_longest_in_batch() {
        let batch = truncate_and_pad(vec![row(&[1, 2, 3]), row(&[4])], 10, 99);

        assert_eq!(batch.seq_len, 3);
        assert_eq!(batch.ids, vec![1, 2, 3, 4, 99, 99]);
        assert_eq!(batch.attention_mask, vec![1, 1, 1, 1, 0, 0]);
        assert_eq!(batch.type_ids, vec![0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn truncates_rows_longer_than_cap() {
        let batch = truncate_and_pad(vec![row(&[1, 2, 3, 4, 5])], 2, 0);

        assert_eq!(batch.seq_len, 2);
        assert_eq!(batch.ids, vec![1, 2]);
        assert_eq!(batch.attention_mask, vec![1, 1]);
    }

    #[test]
    fn padding_is_relative_to_longest_after_truncation() {
        let batch = truncate_and_pad(vec![row(&[1, 2, 3, 4, 5]), row(&[6])], 3, 0);

        assert_eq!(batch.seq_len, 3);
        assert_eq!(batch.ids, vec![1, 2, 3, 6, 0, 0]);
    }

    #[test]
    fn empty_rows_produce_empty_batch() {
        let batch = truncate_and_pad(Vec::new(), 10, 0);
        assert_eq!(batch.seq_len, 0);
        assert!(batch.ids.is_empty());
    }
}
