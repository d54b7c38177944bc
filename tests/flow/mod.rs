mod note_submit;
