use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use super::error::{InferenceError, ModelError};

/// Serialized regressor as written by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub n_features: usize,
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub estimator: Estimator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Linear(LinearRegressor),
    TreeEnsemble(TreeEnsemble),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Bagged trees (random forest): outputs are averaged.
    Mean,
    /// Boosted trees: outputs are summed.
    Sum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub aggregation: Aggregation,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    pub trees: Vec<RegressionTree>,
}

fn default_learning_rate() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

impl ModelArtifact {
    /// Structural checks run once at load time, so that `predict` never has
    /// to deal with a malformed model.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.n_features == 0 {
            return Err(ModelError::Invalid("n_features must be positive".into()));
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != self.n_features {
            return Err(ModelError::Invalid(format!(
                "{} feature names given for {} features",
                self.feature_names.len(),
                self.n_features
            )));
        }
        self.estimator.validate(self.n_features)
    }

    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Vec<f64>, InferenceError> {
        if features.ncols() != self.n_features {
            return Err(InferenceError::ShapeMismatch {
                expected: self.n_features,
                found: features.ncols(),
            });
        }
        if features.nrows() == 0 {
            return Err(InferenceError::EmptyInput);
        }
        Ok(features
            .outer_iter()
            .map(|row| self.estimator.predict_row(row))
            .collect())
    }
}

impl Estimator {
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        match self {
            Estimator::Linear(linear) => linear.validate(n_features),
            Estimator::TreeEnsemble(ensemble) => ensemble.validate(n_features),
        }
    }

    fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        match self {
            Estimator::Linear(linear) => linear.predict_row(row),
            Estimator::TreeEnsemble(ensemble) => ensemble.predict_row(row),
        }
    }
}

impl LinearRegressor {
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.coefficients.len() != n_features {
            return Err(ModelError::Invalid(format!(
                "linear model has {} coefficients for {} features",
                self.coefficients.len(),
                n_features
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Invalid(
                "linear model parameters must be finite".into(),
            ));
        }
        Ok(())
    }

    fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(row.iter())
                .map(|(coef, x)| coef * x)
                .sum::<f64>()
    }
}

impl TreeEnsemble {
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("tree ensemble has no trees".into()));
        }
        if !self.base_score.is_finite() || !self.learning_rate.is_finite() {
            return Err(ModelError::Invalid(
                "base_score and learning_rate must be finite".into(),
            ));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features)
                .map_err(|reason| ModelError::Invalid(format!("tree {}: {}", index, reason)))?;
        }
        Ok(())
    }

    fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.predict_row(row)).sum();
        let combined = match self.aggregation {
            Aggregation::Mean => total / self.trees.len() as f64,
            Aggregation::Sum => total,
        };
        self.base_score + self.learning_rate * combined
    }
}

impl RegressionTree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        let n_nodes = self.nodes.len();
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!("node {} splits on unknown feature {}", index, feature));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", index));
                    }
                    // Children must point forward; this rules out cycles.
                    for child in [left, right] {
                        if child <= index || child >= n_nodes {
                            return Err(format!("node {} has invalid child {}", index, child));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {} has a non-finite value", index));
                    }
                }
            }
        }
        Ok(())
    }

    fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Leaf { value } => return value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}
