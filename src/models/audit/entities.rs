use crate::models::enums::define_str_enum;

define_str_enum! {
    OperationResult {
        Success => "success",
        Failure => "failure",
    }
}

define_str_enum! {
    /// 安全扫描状态
    ScanStatus {
        Pending => "pending",
        Running => "running",
        Completed => "completed",
        Failed => "failed",
    }
}

define_str_enum! {
    AiQueryType {
        DataQuery => "data_query",
        AiResponse => "ai_response",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::catalog::enums;

    #[test]
    fn test_values_match_catalog() {
        assert_eq!(OperationResult::VALUES, enums::OPERATION_RESULT);
        assert_eq!(ScanStatus::VALUES, enums::SCAN_STATUS);
        assert_eq!(AiQueryType::VALUES, enums::AI_QUERY_TYPE);
    }
}
