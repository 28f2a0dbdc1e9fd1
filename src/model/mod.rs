pub mod bands;
pub mod rubric;
pub mod scores;
pub mod verdict;
