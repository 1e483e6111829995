//! BERT sequence-classification model wrapper
//!
//! Uses `candle_transformers::models::bert` for the encoder and adds the
//! pooler + classification head that the pretrained checkpoint carries.

use candle_core::{IndexOp, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};

/// BERT encoder with a pooler and a linear classification head.
///
/// Takes `(token_ids, type_ids, attention_mask)` and returns one logit
/// vector per input sequence.
pub struct BertForSequenceClassification {
    bert: BertModel,
    pooler: Linear,
    classifier: Linear,
}

impl BertForSequenceClassification {
    /// Loads encoder, pooler and classification head from the checkpoint.
    ///
    /// `hidden_size` and `num_labels` come from the checkpoint's
    /// `config.json`; the head weights live under `bert.pooler.dense` /
    /// `classifier` (unprefixed `pooler.dense` is accepted as fallback).
    pub fn load(
        vb: VarBuilder,
        config: &Config,
        hidden_size: usize,
        num_labels: usize,
    ) -> candle_core::Result<Self> {
        let bert = BertModel::load(vb.clone(), config)?;
        let pooler = candle_nn::linear(hidden_size, hidden_size, vb.pp("bert.pooler.dense"))
            .or_else(|_| candle_nn::linear(hidden_size, hidden_size, vb.pp("pooler.dense")))?;
        let classifier = candle_nn::linear(hidden_size, num_labels, vb.pp("classifier"))?;

        Ok(Self {
            bert,
            pooler,
            classifier,
        })
    }

    /// Runs the three parallel `[batch, seq]` tensors through the encoder
    /// and head, returning `[batch, num_labels]` logits.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> candle_core::Result<Tensor> {
        let hidden = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;
        let cls = hidden.i((.., 0))?;
        let pooled = self.pooler.forward(&cls)?.tanh()?;
        self.classifier.forward(&pooled)
    }
}
