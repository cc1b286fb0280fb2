use super::*;

#[test]
fn test_validate_triple_ok() {
    let t = validate_triple(AngleFamily::Coronal, &[25.0, 30.0, 15.0]).unwrap();
    assert_eq!(t.0, [25.0, 30.0, 15.0]);
}

#[test]
fn test_validate_triple_length() {
    let err = validate_triple(AngleFamily::Sagittal, &[25.0, 30.0]).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::TripleLength {
            family: AngleFamily::Sagittal,
            len: 2
        }
    );
    assert!(validate_triple(AngleFamily::Sagittal, &[1.0, 2.0, 3.0, 4.0]).is_err());
}

#[test]
fn test_validate_triple_non_finite() {
    let err = validate_triple(AngleFamily::CoronalBend, &[25.0, f64::NAN, 15.0]).unwrap_err();
    match err {
        ClassifyError::NonFiniteAngle { family, region, .. } => {
            assert_eq!(family, AngleFamily::CoronalBend);
            assert_eq!(region, "mt");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(validate_triple(AngleFamily::Coronal, &[f64::INFINITY, 0.0, 0.0]).is_err());
}

#[test]
fn test_validate_angles() {
    let mut angles = CobbAngles::default();
    assert!(validate_angles(&angles).is_ok());
    angles.sagittal = AngleTriple([0.0, 0.0, f64::NEG_INFINITY]);
    assert!(matches!(
        validate_angles(&angles),
        Err(ClassifyError::NonFiniteAngle {
            family: AngleFamily::Sagittal,
            ..
        })
    ));
}

#[test]
fn test_validate_measurement_error() {
    assert!(validate_measurement_error(&MeasurementError::shared(3.2, 4.2)).is_ok());
    assert!(validate_measurement_error(&MeasurementError::shared(0.0, 0.0)).is_ok());

    let err = validate_measurement_error(&MeasurementError::shared(3.2, -1.0)).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::InvalidStandardDeviation {
            family: AngleFamily::Sagittal,
            value: -1.0
        }
    );

    let mut sd = MeasurementError::default();
    sd.coronal_bend = f64::NAN;
    assert!(matches!(
        validate_measurement_error(&sd),
        Err(ClassifyError::InvalidStandardDeviation {
            family: AngleFamily::CoronalBend,
            ..
        })
    ));
}

#[test]
fn test_error_messages() {
    let err = ClassifyError::TripleLength {
        family: AngleFamily::Coronal,
        len: 4,
    };
    assert_eq!(
        err.to_string(),
        "coronal angles: expected 3 values (PT, MT, TL/L), got 4"
    );
}
