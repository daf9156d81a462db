// templates/pages/results.rs
use crate::domain::ListingTable;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub struct ResultsVm<'a> {
    pub table: &'a ListingTable,
    pub warnings: &'a [String],
}

pub fn results_page(vm: &ResultsVm) -> Markup {
    desktop_layout(
        "수집 결과",
        html! {
            main class="container" {
                h1 { "아파트 정보 수집 완료" }
                p {
                    "총 " strong { (vm.table.len()) } "건의 매물 정보를 찾았습니다. ("
                    (vm.table.si_do_name) " / " (vm.table.sigungu_name) ")"
                }

                (card("다운로드", html! {
                    ul {
                        li { a href="/download/xlsx" { "Download Excel" } }
                        li { a href="/download/csv" { "Download CSV" } }
                    }
                }))

                @if !vm.warnings.is_empty() {
                    (card("경고", warnings_list(vm.warnings)))
                }

                (card("미리보기", html! {
                    div class="scroll" {
                        table class="preview" {
                            thead {
                                tr {
                                    @for col in ListingTable::header() {
                                        th { (col) }
                                    }
                                }
                            }
                            tbody {
                                @for rec in &vm.table.rows {
                                    tr {
                                        @for cell in vm.table.row_values(rec) {
                                            td { (cell) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }))
            }
        },
    )
}

pub fn no_data_page(city: &str, sigungu: &str, warnings: &[String]) -> Markup {
    desktop_layout(
        "수집 결과",
        html! {
            main class="container" {
                h1 { "수집 결과" }
                p { "No data to save. (" (city) " / " (sigungu) ")" }

                @if !warnings.is_empty() {
                    (card("경고", warnings_list(warnings)))
                }

                p { a href="/" { "← 다시 수집하기" } }
            }
        },
    )
}

fn warnings_list(warnings: &[String]) -> Markup {
    html! {
        ul {
            @for w in warnings {
                li { p class="warning" { (w) } }
            }
        }
    }
}
