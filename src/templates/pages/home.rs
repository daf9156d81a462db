// templates/pages/home.rs
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "아파트 정보 수집기",
        html! {
            main class="container" {
                h1 { "아파트 정보 수집기" }

                (card("수집 범위", html! {
                    form action="/collect" method="get" {
                        label for="city" { "시/도 이름 입력" }
                        input type="text" id="city" name="city" value="서울특별시" required;

                        label for="sigungu" { "구/군/구 이름 입력" }
                        input type="text" id="sigungu" name="sigungu" value="강남구";

                        label for="dong" { "동 이름 입력 (선택사항)" }
                        input type="text" id="dong" name="dong" value="전체";

                        button type="submit" { "정보 수집 시작" }
                    }
                }))
            }
        },
    )
}
