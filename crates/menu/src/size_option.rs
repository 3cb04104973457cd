//! Size options: priced size variants shared across drinks and sides.

use serde::{Deserialize, Serialize};

use burgerstream_core::{DomainError, DomainResult, Entity, Money, SizeOptionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    id: SizeOptionId,
    label: String,
    size_label: String,
    extra_price: Money,
}

impl SizeOption {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size_label(&self) -> &str {
        &self.size_label
    }

    pub fn extra_price(&self) -> Money {
        self.extra_price
    }

    /// Full-field replacement from a validated payload, preserving the id.
    pub fn overwrite(&mut self, input: SizeOptionInput) -> DomainResult<()> {
        let replacement = input.into_size_option(self.id)?;
        *self = replacement;
        Ok(())
    }
}

impl Entity for SizeOption {
    type Id = SizeOptionId;

    fn id(&self) -> &SizeOptionId {
        &self.id
    }
}

/// SizeOption create/update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOptionInput {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, alias = "sizeLabel")]
    pub size_label: Option<String>,
    #[serde(default, alias = "extraPrice")]
    pub extra_price: Option<Money>,
}

impl SizeOptionInput {
    pub fn new(label: impl Into<String>, size_label: impl Into<String>, extra_price: Money) -> Self {
        Self {
            label: Some(label.into()),
            size_label: Some(size_label.into()),
            extra_price: Some(extra_price),
        }
    }

    /// Checks label, size label and extra price in that order.
    pub fn validate(&self) -> DomainResult<()> {
        if self.label.is_none() {
            return Err(DomainError::validation("Size option is missing a label"));
        }
        if self.size_label.is_none() {
            return Err(DomainError::validation("Size option is missing a size label"));
        }
        match self.extra_price {
            None => Err(DomainError::validation("Size option is missing a base price")),
            Some(p) if p.is_negative() => Err(DomainError::validation(
                "Size option extra price cannot be negative",
            )),
            Some(_) => Ok(()),
        }
    }

    pub fn into_size_option(self, id: SizeOptionId) -> DomainResult<SizeOption> {
        self.validate()?;
        match (self.label, self.size_label, self.extra_price) {
            (Some(label), Some(size_label), Some(extra_price)) => Ok(SizeOption {
                id,
                label,
                size_label,
                extra_price,
            }),
            _ => Err(DomainError::validation("Size option is incomplete")),
        }
    }
}
