mod work_label_classifier;

pub use work_label_classifier::{WorkLabelClassifier, WorkLabelRule};
