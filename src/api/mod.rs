// External platform API clients
pub mod codechef;
pub mod hackerrank;
pub mod leetcode;
