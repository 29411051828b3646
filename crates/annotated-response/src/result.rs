//! Status-code classification strategies.
//!
//! A [`ResultByCode`] strategy converts an HTTP status code into a default
//! result keyword. [`AnnotatedResponse`](crate::AnnotatedResponse) consults
//! it the first time a status is assigned while the result field is still
//! empty; [`DefaultEnglish`] supplies the stock vocabulary.

/// Converts an HTTP status code into a result keyword.
///
/// Implementations must be pure and side-effect free. Any
/// `Fn(u16) -> String` closure qualifies through the blanket impl, so a
/// plain function value can serve as a strategy:
///
/// ```
/// use annotated_response::ResultByCode;
///
/// let strategy = |code: u16| if code < 400 { "ok".to_string() } else { "ko".to_string() };
/// assert_eq!(strategy.classify(204), "ok");
/// ```
pub trait ResultByCode: Send + Sync {
    /// The result keyword for `http_status_code`.
    ///
    /// An empty string means "no opinion" and leaves the result unset.
    fn classify(&self, http_status_code: u16) -> String;
}

impl<F> ResultByCode for F
where
    F: Fn(u16) -> String + Send + Sync,
{
    fn classify(&self, http_status_code: u16) -> String {
        self(http_status_code)
    }
}

/// The default English vocabulary.
///
/// Buckets a status code by its leading decimal digit: 4 and above report
/// `"failed"`, 201 reports `"created"`, everything else reports
/// `"succeeded"`. Total over all `u16` values; codes outside 100..600
/// degenerate to the same digit rule (0 reports `"succeeded"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnglish;

impl ResultByCode for DefaultEnglish {
    fn classify(&self, http_status_code: u16) -> String {
        let mut category = http_status_code;
        while category >= 10 {
            category /= 10;
        }
        if category >= 4 {
            return "failed".to_string();
        }
        if http_status_code == 201 {
            return "created".to_string();
        }
        "succeeded".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classifies_by_code() {
        let cases = [
            (200, "succeeded"),
            (300, "succeeded"),
            (201, "created"),
            (400, "failed"),
            (404, "failed"),
            (500, "failed"),
        ];
        for (code, expected) in cases {
            assert_eq!(DefaultEnglish.classify(code), expected, "code {code}");
        }
    }

    #[test]
    fn degenerate_codes_classify_without_panicking() {
        assert_eq!(DefaultEnglish.classify(0), "succeeded");
        assert_eq!(DefaultEnglish.classify(1), "succeeded");
        assert_eq!(DefaultEnglish.classify(42), "failed");
        assert_eq!(DefaultEnglish.classify(999), "failed");
        assert_eq!(DefaultEnglish.classify(2010), "succeeded");
        assert_eq!(DefaultEnglish.classify(u16::MAX), "failed");
    }

    #[test]
    fn closures_work_as_strategies() {
        let strategy = |code: u16| format!("code-{code}");
        assert_eq!(strategy.classify(7), "code-7");
    }

    fn leading_digit(mut code: u16) -> u16 {
        while code >= 10 {
            code /= 10;
        }
        code
    }

    proptest! {
        #[test]
        fn failure_digits_report_failed(code in any::<u16>()) {
            prop_assume!(leading_digit(code) >= 4);
            prop_assert_eq!(DefaultEnglish.classify(code), "failed");
        }

        #[test]
        fn success_digits_report_succeeded_or_created(code in any::<u16>()) {
            prop_assume!(leading_digit(code) < 4);
            let expected = if code == 201 { "created" } else { "succeeded" };
            prop_assert_eq!(DefaultEnglish.classify(code), expected);
        }
    }
}
