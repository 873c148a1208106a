use record_forge::{GenerateOpts, ModelOpts, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_model_opts_creation() {
    let opts = ModelOpts {
        model: Some(PathBuf::from("model.yaml")),
        fields: vec![("title".to_string(), "t:4-6w".to_string())],
    };

    assert_eq!(opts.model, Some(PathBuf::from("model.yaml")));
    assert_eq!(opts.fields.len(), 1);
}

#[test]
fn test_generate_opts_defaults() {
    let opts = GenerateOpts::default();

    assert!(opts.model.model.is_none());
    assert!(opts.model.fields.is_empty());
    assert_eq!(opts.volume, None);
    assert_eq!(opts.seed, None);
    assert_eq!(opts.format, OutputFormat::Json);
    assert!(opts.output.is_none());
}

#[test]
fn test_seeded_opts_are_reproducible() {
    let opts = GenerateOpts {
        model: ModelOpts {
            model: None,
            fields: vec![
                ("n".to_string(), "i:0-1000".to_string()),
                ("words".to_string(), "t:2-8w".to_string()),
            ],
        },
        volume: Some(4),
        seed: Some(11),
        ..Default::default()
    };

    let first = opts.build_generator().unwrap().fetch_all();
    let second = opts.build_generator().unwrap().fetch_all();
    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}
