//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동 중 저장소 연결과 서비스 조립 단계를 표시합니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║       🛒 INITIALIZING SHOPPING LIST SERVICE      ║
//! ╚══════════════════════════════════════════════════╝
//! → Step 2: Connecting storage (mongodb)
//!    ├─ MongoDB: shopping_lists
//!    ├─ Indexes: ✓ Created
//! ✓ Step 2: Storage ready (4 items)
//! ```

const BOX_WIDTH: usize = 50;

/// 박스로 둘러싼 제목을 중앙 정렬하여 출력합니다
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(BOX_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 단계 완료와 준비된 구성 요소 수를 출력합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}
