//! JWT 토큰 발급/검증 서비스
//!
//! HS256으로 서명된 단기 액세스 토큰을 발급합니다. 각 토큰은 128비트 난수 기반의
//! 고유 ID(`jti`)를 가지며, 로그아웃 시 이 값이 폐기 원장에 기록됩니다.
//!
//! 검증 시 알고리즘을 HS256으로 고정하므로 헤더의 `alg` 값을 바꾼 토큰
//! (알고리즘 혼동 공격)은 서명 오류로 거부됩니다.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;
use crate::{
    config::JwtConfig,
    core::{AppResult, ErrorContext},
    domain::models::{IssuedToken, TokenClaims},
};

/// 토큰 디코딩 실패 종류
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// 구조적으로 JWT가 아니거나 필수 클레임이 없는 경우
    #[error("malformed token")]
    Malformed,
    /// 다른 키나 다른 알고리즘으로 서명된 경우
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        match error.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingAlgorithm => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    }
}

const ALGORITHM: Algorithm = Algorithm::HS256;

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// 서명 키와 토큰 유효 시간으로 서비스를 생성합니다.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_MINUTES` 설정으로 생성합니다.
    pub fn from_config() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration())
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// subject(사용자명)에 대한 새 토큰을 발급합니다.
    pub fn issue(&self, subject: &str) -> AppResult<IssuedToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;
        let jti = generate_jti();

        let claims = TokenClaims {
            jti: jti.clone(),
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .with_context(|| format!("failed to sign token for {}", subject))?;

        Ok(IssuedToken {
            token,
            jti,
            subject: claims.sub,
            issued_at,
            expires_at,
        })
    }

    /// 서명과 만료 시각을 검증하고 클레임을 반환합니다.
    ///
    /// 폐기 여부는 검사하지 않습니다. 폐기 검사는 [`AuthGate`](super::AuthGate)의 몫입니다.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?.claims;

        // 라이브러리는 exp == now 를 허용하지만 토큰은 now < exp 일 때만 유효하다
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

/// 16바이트 난수를 URL-safe base64로 인코딩한 토큰 ID
fn generate_jti() -> String {
    let bytes: [u8; 16] = rand::random();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SECRET: &str = "test-secret-that-is-long-enough-for-hs256";

    fn service() -> TokenService {
        TokenService::new(SECRET, Duration::minutes(15))
    }

    #[test]
    fn test_issue_then_decode_recovers_subject() {
        let tokens = service();
        let issued = tokens.issue("alice").unwrap();

        let claims = tokens.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.jti, issued.jti);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
        assert_eq!(issued.expires_in(), 15 * 60);
    }

    #[test]
    fn test_jti_is_unique_and_128_bits() {
        let tokens = service();
        let jtis: HashSet<String> = (0..200)
            .map(|_| tokens.issue("alice").unwrap().jti)
            .collect();

        assert_eq!(jtis.len(), 200);
        for jti in &jtis {
            assert_eq!(URL_SAFE_NO_PAD.decode(jti).unwrap().len(), 16);
        }
    }

    #[test]
    fn test_different_secret_is_rejected() {
        let issued = service().issue("alice").unwrap();
        let other = TokenService::new("another-secret-entirely-different", Duration::minutes(15));

        assert_eq!(other.decode(&issued.token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            jti: "jti".to_string(),
            sub: "alice".to_string(),
            iat: now,
            exp: now + 600,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        ).unwrap();

        assert_eq!(service().decode(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let tokens = service();

        assert_eq!(tokens.decode("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(tokens.decode(""), Err(TokenError::Malformed));
        assert_eq!(tokens.decode("a.b.c"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let tokens = service();
        let issued = tokens.issue("alice").unwrap();
        let forged = tokens.issue("mallory").unwrap();

        // alice 토큰의 서명에 mallory 페이로드를 붙인다
        let alice_parts: Vec<&str> = issued.token.split('.').collect();
        let mallory_parts: Vec<&str> = forged.token.split('.').collect();
        let spliced = format!("{}.{}.{}", alice_parts[0], mallory_parts[1], alice_parts[2]);

        assert_eq!(tokens.decode(&spliced), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let expired = TokenService::new(SECRET, Duration::seconds(-30));
        let issued = expired.issue("alice").unwrap();

        assert_eq!(service().decode(&issued.token), Err(TokenError::Expired));
    }

    #[test]
    fn test_missing_jti_is_malformed() {
        #[derive(serde::Serialize)]
        struct NoJti {
            sub: String,
            exp: i64,
        }

        let token = encode(
            &Header::new(ALGORITHM),
            &NoJti { sub: "alice".to_string(), exp: Utc::now().timestamp() + 600 },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        ).unwrap();

        assert_eq!(service().decode(&token), Err(TokenError::Malformed));
    }
}
