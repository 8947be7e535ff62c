//! 터미널 출력 유틸리티
//!
//! CLI 결과를 박스 제목과 정렬된 키/값 목록으로 출력합니다.

use crate::domain::dto::users::UserProfile;

/// 고정 너비 박스 제목을 출력합니다.
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

pub fn print_entry(name: &str, value: &str) {
    println!("   ├─ {:<18} {}", name, value);
}

/// 사용자 프로필을 키/값 목록 문자열로 만듭니다.
pub fn format_profile(profile: &UserProfile) -> Vec<(&'static str, String)> {
    let optional = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    vec![
        ("id", profile.id.to_string()),
        ("username", profile.username.clone()),
        ("email", profile.email.clone()),
        ("profilePicLink", optional(&profile.profile_pic_link)),
        ("background", optional(&profile.background)),
        ("streak", profile.streak.to_string()),
        ("dailyGoal", profile.daily_goal.to_string()),
        (
            "lastLogin",
            profile.last_login.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string()),
        ),
        ("uiLang", optional(&profile.ui_lang)),
        ("friendRequestsOff", profile.friendship_requests_blocked.to_string()),
    ]
}

pub fn print_profile(title: &str, profile: &UserProfile) {
    print_boxed_title(title);
    for (name, value) in format_profile(profile) {
        print_entry(name, &value);
    }
    println!();
}
