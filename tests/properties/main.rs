//! Property test harness.

mod answer_props;
