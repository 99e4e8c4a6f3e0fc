pub mod self_organizing;
