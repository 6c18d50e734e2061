use iced::{
    Element, Length,
    widget::{column, container, image::Handle, row, text},
};

/// Two captioned images next to each other, each taking half the width
pub fn side_by_side<'a, Message>(
    left_title: &'a str,
    left: &Handle,
    right_title: &'a str,
    right: &Handle,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        row![
            panel(left_title, left),
            panel(right_title, right),
        ]
        .spacing(20),
    )
    .center_x(Length::Fill)
    .into()
}

fn panel<'a, Message>(title: &'a str, handle: &Handle) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![
            text(title).size(18),
            iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(10),
    )
    .width(Length::FillPortion(1))
    .into()
}
