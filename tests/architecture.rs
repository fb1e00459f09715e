//! Architecture Verification Suite
//!
//! Public-API checks for the three architectures: construction, signatures,
//! disjoint processing output, and thread-safety of the shared parts.

#[cfg(test)]
mod architecture_tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::{json, Map, Value};
    use tide::{ArchitectureType, CognitiveArchitecture, DimensionalSpace, TideError};

    fn info() -> Map<String, Value> {
        let mut info = Map::new();
        info.insert("content".to_string(), json!("test"));
        info.insert("temporal_context".to_string(), json!("future planning"));
        info
    }

    #[test]
    fn test_architecture_creation() {
        assert_eq!(CognitiveArchitecture::from_tag("NT").unwrap().architecture_type(), ArchitectureType::Nt);
        assert_eq!(CognitiveArchitecture::from_tag("ASD").unwrap().architecture_type(), ArchitectureType::Asd);
        assert_eq!(CognitiveArchitecture::from_tag("ADHD").unwrap().architecture_type(), ArchitectureType::Adhd);

        match CognitiveArchitecture::from_tag("INVALID") {
            Err(TideError::InvalidArchitecture(tag)) => assert_eq!(tag, "INVALID"),
            other => panic!("Expected InvalidArchitecture, got {:?}", other.map(|a| a.architecture_type())),
        }
    }

    #[test]
    fn test_behavioral_signature_ordering() {
        let nt = CognitiveArchitecture::new(ArchitectureType::Nt).behavioral_signature();
        let asd = CognitiveArchitecture::new(ArchitectureType::Asd).behavioral_signature();
        let adhd = CognitiveArchitecture::new(ArchitectureType::Adhd).behavioral_signature();

        assert!(asd.temporal_consistency > nt.temporal_consistency);
        assert!(nt.temporal_consistency > adhd.temporal_consistency);
        assert_eq!((adhd.planning_horizon, nt.planning_horizon, asd.planning_horizon), (1, 30, 90));
    }

    #[test]
    fn test_information_processing() {
        let mut rng = StdRng::seed_from_u64(2024);
        let nt = CognitiveArchitecture::new(ArchitectureType::Nt).process_information_with(&info(), &mut rng);
        let asd = CognitiveArchitecture::new(ArchitectureType::Asd).process_information_with(&info(), &mut rng);
        let adhd = CognitiveArchitecture::new(ArchitectureType::Adhd).process_information_with(&info(), &mut rng);

        assert!(nt.contains_key("temporal_flexibility"));
        assert!(asd.contains_key("temporal_structure"));
        assert!(adhd.contains_key("temporal_compression"));

        assert_eq!(adhd["temporal_compression"]["temporal_window"], "now");
        assert_eq!(adhd["temporal_compression"]["future_discount"], 0.8);
        assert_eq!(asd["rule_consistency"], 0.9);
        assert!((nt["self_adaptation"].as_f64().unwrap() - (1.0 - 0.72_f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_position_lookup_is_deterministic() {
        let space = DimensionalSpace::new();
        for arch in ArchitectureType::ALL {
            for element in ["self", "time", "emotion", "logic", "morality"] {
                assert_eq!(space.position_of(element, arch), space.position_of(element, arch));
            }
        }
    }

    #[test]
    fn test_shared_parts_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<tide::CognitiveArchitecture>();
        assert_send_sync::<tide::DimensionalSpace>();
        assert_send_sync::<tide::SharedIntegrationEngine>();
        assert_send_sync::<tide::IntegrationEngine>();
    }
}
