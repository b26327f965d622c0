pub mod stage1_tally;
pub mod stage2_normalize;
pub mod stage3_fit;
pub mod stage4_classify;
pub mod stage5_report;
