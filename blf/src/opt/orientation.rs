use sheetnest::entities::NestingPart;

/// Footprint of a part in one of its allowed orientations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub width: f32,
    pub height: f32,
    /// Turned by 90° with respect to the part's definition
    pub rotated: bool,
}

/// Orientations in which `part` should be tried: always the original one first,
/// followed by the 90° turned variant if rotation is allowed and actually changes the footprint.
pub fn orientations(part: &NestingPart, allow_rotation: bool) -> impl Iterator<Item = Orientation> {
    let original = Orientation {
        width: part.width,
        height: part.height,
        rotated: false,
    };
    let turned = Orientation {
        width: part.height,
        height: part.width,
        rotated: true,
    };
    std::iter::once(original).chain((allow_rotation && part.is_rotatable()).then_some(turned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use test_case::test_case;

    #[test_case(NestingPart::rectangle(0, 300.0, 800.0), true, 2; "rectangle with rotation")]
    #[test_case(NestingPart::rectangle(0, 300.0, 800.0), false, 1; "rectangle without rotation")]
    #[test_case(NestingPart::rectangle(0, 500.0, 500.0), true, 1; "square")]
    #[test_case(NestingPart::circle(0, 500.0), true, 1; "circle")]
    fn number_of_orientations(part: NestingPart, allow_rotation: bool, expected: usize) {
        assert_eq!(orientations(&part, allow_rotation).count(), expected);
    }

    #[test]
    fn original_orientation_comes_first() {
        let part = NestingPart::rectangle(0, 300.0, 800.0);
        let o = orientations(&part, true).collect_vec();
        assert_eq!(
            o,
            vec![
                Orientation { width: 300.0, height: 800.0, rotated: false },
                Orientation { width: 800.0, height: 300.0, rotated: true },
            ]
        );
    }
}
