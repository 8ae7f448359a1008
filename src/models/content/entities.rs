use crate::models::enums::define_str_enum;

define_str_enum! {
    /// 海报元素类型
    PosterElementType {
        Text => "text",
        Image => "image",
        Shape => "shape",
        Qrcode => "qrcode",
    }
}

define_str_enum! {
    AiRelationStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::catalog::enums;

    #[test]
    fn test_values_match_catalog() {
        assert_eq!(PosterElementType::VALUES, enums::POSTER_ELEMENT_TYPE);
        assert_eq!(AiRelationStatus::VALUES, enums::AI_RELATION_STATUS);
    }
}
